use std::fmt::Display;
use std::str::FromStr;

use crate::error::HlsError;

pub const MIN_WIDTH: u32 = 1920;
pub const MIN_HEIGHT: u32 = 1080;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Both dimensions must clear the Full HD threshold on their own; there
    /// is no upper bound.
    pub fn is_full_hd(&self) -> bool {
        self.width >= MIN_WIDTH && self.height >= MIN_HEIGHT
    }
}

impl Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Resolution {
    type Err = HlsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let splits: Vec<&str> = s.split('x').collect();
        match splits.len() {
            2 => Ok(Resolution {
                width: parse_dimension(s, splits[0], "width")?,
                height: parse_dimension(s, splits[1], "height")?,
            }),
            _ => Err(HlsError::for_parse(s, "expected WIDTHxHEIGHT")),
        }
    }
}

fn parse_dimension(text: &str, token: &str, what: &str) -> Result<u32, HlsError> {
    match token.parse::<u32>() {
        Ok(0) => Err(HlsError::for_parse(text, &format!("{} must be positive", what))),
        Ok(n) => Ok(n),
        Err(err) => Err(HlsError::for_parse(text, &format!("{} '{}': {}", what, token, err))),
    }
}
