use derive_more::Display;
use std::str::FromStr;

/// Language of user-visible text. Korean is the board's default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum Locale {
    #[default]
    #[display("ko")]
    Ko,
    #[display("en")]
    En,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ko" | "ko-kr" | "korean" => Ok(Locale::Ko),
            "en" | "en-us" | "english" => Ok(Locale::En),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_spellings() {
        assert_eq!("KO".parse::<Locale>(), Ok(Locale::Ko));
        assert_eq!("en-US".parse::<Locale>(), Ok(Locale::En));
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::default().to_string(), "ko");
    }
}
