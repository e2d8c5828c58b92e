mod conjugation_tests;
