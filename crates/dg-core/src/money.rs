//! Euro amounts

use std::fmt;
use std::ops::Sub;

/// A euro amount held as whole cents.
///
/// Signed: a discount larger than the plan price yields a negative total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price {
    cents: i64,
}

impl Price {
    pub const ZERO: Price = Price { cents: 0 };

    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    pub const fn from_euros(euros: i64) -> Self {
        Self { cents: euros * 100 }
    }

    pub const fn cents(&self) -> i64 {
        self.cents
    }

    pub fn is_negative(&self) -> bool {
        self.cents < 0
    }
}

impl Sub for Price {
    type Output = Price;

    fn sub(self, rhs: Price) -> Price {
        Price::from_cents(self.cents - rhs.cents)
    }
}

/// Renders as `10€`, `1,999€` or `9.50€`.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        let euros = group_thousands(abs / 100);
        match abs % 100 {
            0 => write!(f, "{sign}{euros}€"),
            rest => write!(f, "{sign}{euros}.{rest:02}€"),
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
