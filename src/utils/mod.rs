mod macros;

pub trait StrExt {
    fn split_exact<const N: usize>(&self, pat: &str) -> [Option<&str>; N];
}

impl StrExt for str {
    fn split_exact<const N: usize>(&self, pat: &str) -> [Option<&str>; N] {
        let mut split = self.splitn(N, pat);
        [(); N].map(|_| split.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::{max, min};

    #[test]
    fn test_split_exact() {
        assert_eq!("09:30".split_exact::<2>(":"), [Some("09"), Some("30")]);
        assert_eq!("0930".split_exact::<2>(":"), [Some("0930"), None]);
        assert_eq!(
            "2026-08-25".split_exact::<3>("-"),
            [Some("2026"), Some("08"), Some("25")]
        );
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min!(3, 1, 2), 1);
        assert_eq!(max!(3, 1, 2), 3);
        assert_eq!(min!(5), 5);
    }
}
