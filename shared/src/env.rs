use std::str::FromStr;

use log::warn;

pub const RESOLUTION_VAR: &str = "MANDELTRACE_RESOLUTION";
pub const ITERATIONS_VAR: &str = "MANDELTRACE_ITERATIONS";

/// Loads the `.env` file of the working directory, if any.
pub fn init() {
    dotenv::dotenv().ok();
}

/// Reads `key` from the environment, falling back to `default` when the
/// variable is missing or cannot be parsed.
pub fn get_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!("Ignoring {}={:?}: not a valid value", key, raw);
                default
            }
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::get_or;

    #[test]
    fn missing_variable_falls_back() {
        assert_eq!(get_or("MANDELTRACE_TEST_MISSING", 42u32), 42);
    }

    #[test]
    fn parses_present_variable() {
        std::env::set_var("MANDELTRACE_TEST_PRESENT", " 640 ");
        assert_eq!(get_or("MANDELTRACE_TEST_PRESENT", 1000u32), 640);
    }

    #[test]
    fn garbage_falls_back() {
        std::env::set_var("MANDELTRACE_TEST_GARBAGE", "lots");
        assert_eq!(get_or("MANDELTRACE_TEST_GARBAGE", 100u32), 100);
    }
}
