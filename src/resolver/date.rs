/// Country whose documents store dates as `YYYYMMDD`. Every other country
/// uses `MMDDYYYY`.
pub const CANADA: &str = "CAN";

/// Normalizes an eight digit document date to `YEAR-MONTH-DAY`.
///
/// The year is printed with its four digits, month and day as unpadded
/// integers. Components are not range checked. Returns `None` if the value
/// is not eight bytes long or a component is not numeric.
pub fn normalize(value: &str, country: Option<&str>) -> Option<String> {
    let bytes = value.as_bytes();
    if bytes.len() != 8 {
        return None;
    }

    let (year, month, day) = if country == Some(CANADA) {
        (&bytes[0..4], &bytes[4..6], &bytes[6..8])
    } else {
        (&bytes[4..8], &bytes[0..2], &bytes[2..4])
    };

    let year = parse_number(year)?;
    let month = parse_number(month)?;
    let day = parse_number(day)?;

    Some(format!("{year:04}-{month}-{day}"))
}

fn parse_number(digits: &[u8]) -> Option<u32> {
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }

    Some(
        digits
            .iter()
            .fold(0, |n, d| n * 10 + u32::from(d - b'0')),
    )
}
