//! Application side primary key generators.
//!
//! A [`Column`](crate::Column) can name the generator that fills it with
//! [`Column::id_generator`](crate::Column::id_generator). The name does not
//! change the generated DDL.

use uuid::Uuid;

use crate::dialect::Dialect;
use crate::error::Result;

/// Produces primary key values.
pub trait IdGenerator: Send + Sync {
    /// Name a column refers to this generator by.
    fn name(&self) -> &'static str;

    /// Returns the next id for a table on `dialect`.
    ///
    /// # Errors
    ///
    /// Implementations backed by the database fail when it is unreachable.
    /// The built-in generators never fail.
    fn next_id(&self, dialect: Dialect) -> Result<String>;
}

/// Random UUID in hyphenated form, 36 characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uuid36Generator;

impl IdGenerator for Uuid36Generator {
    fn name(&self) -> &'static str {
        "uuid36"
    }

    fn next_id(&self, _dialect: Dialect) -> Result<String> {
        Ok(Uuid::new_v4().hyphenated().to_string())
    }
}

/// Random UUID as 32 hex digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uuid32Generator;

impl IdGenerator for Uuid32Generator {
    fn name(&self) -> &'static str {
        "uuid32"
    }

    fn next_id(&self, _dialect: Dialect) -> Result<String> {
        Ok(Uuid::new_v4().simple().to_string())
    }
}

/// Random UUID in base 36, 25 characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uuid25Generator;

impl IdGenerator for Uuid25Generator {
    fn name(&self) -> &'static str {
        "uuid25"
    }

    fn next_id(&self, _dialect: Dialect) -> Result<String> {
        Ok(base36(Uuid::new_v4().as_u128(), 25))
    }
}

/// Looks a built-in generator up by name, ignoring case.
#[must_use]
pub fn builtin_generator(name: &str) -> Option<&'static dyn IdGenerator> {
    let generators: [&'static dyn IdGenerator; 3] =
        [&Uuid36Generator, &Uuid32Generator, &Uuid25Generator];
    generators
        .into_iter()
        .find(|generator| generator.name().eq_ignore_ascii_case(name))
}

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn base36(mut value: u128, width: usize) -> String {
    let mut digits = vec![b'0'; width];
    for slot in digits.iter_mut().rev() {
        *slot = DIGITS[usize::try_from(value % 36).unwrap_or_default()];
        value /= 36;
    }
    String::from_utf8_lossy(&digits).into_owned()
}
