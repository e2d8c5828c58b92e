/// Inclusive `(min, max)` code point bounds.
pub type CodepointRange = (u32, u32);

pub const HIRAGANA_SMALL_TSU: char = 'っ';
pub const KATAKANA_SMALL_KA_CODE_POINT: u32 = 0x30f5;
pub const KATAKANA_SMALL_KE_CODE_POINT: u32 = 0x30f6;

pub const HIRAGANA_CONVERSION_RANGE: CodepointRange = (0x3041, 0x3096);
pub const KATAKANA_CONVERSION_RANGE: CodepointRange = (0x30a1, 0x30f6);

pub fn is_code_point_in_range(code_point: u32, range: CodepointRange) -> bool {
    code_point >= range.0 && code_point <= range.1
}

/// Shifts katakana into the hiragana block.
///
/// The prolonged sound mark `ー` and the small ヵ/ヶ have no hiragana
/// counterpart that keeps their reading, so they are left as-is.
pub fn convert_katakana_to_hiragana<T: AsRef<str>>(text: T) -> String {
    let offset = KATAKANA_CONVERSION_RANGE.0 - HIRAGANA_CONVERSION_RANGE.0;
    text.as_ref()
        .chars()
        .map(|c| {
            let code_point = c as u32;
            match code_point {
                KATAKANA_SMALL_KA_CODE_POINT | KATAKANA_SMALL_KE_CODE_POINT => c,
                _ if is_code_point_in_range(code_point, KATAKANA_CONVERSION_RANGE) => {
                    char::from_u32(code_point - offset).unwrap_or(c)
                }
                _ => c,
            }
        })
        .collect()
}

/// Splits off the final character of a reading.
pub fn split_last_char(text: &str) -> Option<(&str, char)> {
    let last = text.chars().next_back()?;
    Some((&text[..text.len() - last.len_utf8()], last))
}
