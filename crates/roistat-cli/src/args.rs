//! Comma-separated numeric arguments

use crate::error::{CliError, CliResult};
use std::str::FromStr;

fn parse_list<T: FromStr>(s: &str, what: &'static str, expected: usize) -> CliResult<Vec<T>> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != expected {
        return Err(CliError::Argument {
            what,
            message: format!("expected {} comma-separated numbers, got '{}'", expected, s),
        });
    }
    parts
        .iter()
        .map(|p| {
            p.trim().parse::<T>().map_err(|_| CliError::Argument {
                what,
                message: format!("'{}' is not a number", p.trim()),
            })
        })
        .collect()
}

/// Parse `a,b,c,d`.
pub fn parse_quad<T: FromStr + Copy>(s: &str, what: &'static str) -> CliResult<[T; 4]> {
    let v = parse_list::<T>(s, what, 4)?;
    Ok([v[0], v[1], v[2], v[3]])
}

/// Parse `a,b`.
pub fn parse_pair<T: FromStr + Copy>(s: &str, what: &'static str) -> CliResult<(T, T)> {
    let v = parse_list::<T>(s, what, 2)?;
    Ok((v[0], v[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quad() {
        assert_eq!(parse_quad::<i32>("1, 2,3 ,-4", "region").unwrap(), [1, 2, 3, -4]);
        assert_eq!(
            parse_quad::<f64>("0.5,1,2.25,3", "drag").unwrap(),
            [0.5, 1.0, 2.25, 3.0]
        );
    }

    #[test]
    fn test_parse_wrong_count() {
        let err = parse_quad::<i32>("1,2,3", "region").unwrap_err();
        assert!(err.to_string().contains("expected 4"));
        assert!(parse_pair::<f64>("1", "offset").is_err());
    }

    #[test]
    fn test_parse_not_a_number() {
        let err = parse_quad::<i32>("1,2,x,4", "region").unwrap_err();
        assert_eq!(err.to_string(), "invalid region: 'x' is not a number");
    }
}
