use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeUnit {
    B,
    KB,
    MB,
    GB,
}

impl SizeUnit {
    const ALL: [SizeUnit; 4] = [SizeUnit::B, SizeUnit::KB, SizeUnit::MB, SizeUnit::GB];

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeUnit::B => "B",
            SizeUnit::KB => "KB",
            SizeUnit::MB => "MB",
            SizeUnit::GB => "GB",
        }
    }
}

/// A byte count scaled to the largest base-1024 unit (capped at GB) that
/// keeps it at or above one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HumanSize {
    pub value: u64,
    pub unit: SizeUnit,
}

impl HumanSize {
    pub fn from_bytes(bytes: u64) -> Self {
        let mut index = 0;
        let mut divisor = 1u64;
        while index + 1 < SizeUnit::ALL.len() && bytes >= divisor * 1024 {
            divisor *= 1024;
            index += 1;
        }

        // Two-decimal rounding first, then to the nearest whole unit with
        // ties going to even.
        let scaled = bytes as f64 / divisor as f64;
        let scaled = (scaled * 100.0).round() / 100.0;
        Self {
            value: scaled.round_ties_even() as u64,
            unit: SizeUnit::ALL[index],
        }
    }

    pub fn bucket(&self) -> String {
        if self.value < 50 {
            format!("lessThan50{}", self.unit.as_str())
        } else {
            format!("moreThan100{}", self.unit.as_str())
        }
    }
}

impl fmt::Display for HumanSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value == 0 {
            return f.write_str("0B");
        }
        write!(f, "{}_{}", self.value, self.unit.as_str())
    }
}

pub fn size_bucket(bytes: u64) -> String {
    HumanSize::from_bytes(bytes).bucket()
}
