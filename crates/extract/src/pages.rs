//! `--pages` argument parsing.
//!
//! Accepts `all`, a single page (`3`), a range (`1-3`), a list (`1,3,5`),
//! or a mix (`1-3,7`). Pages are 1-based; selecting pages past the end of
//! the document matches nothing.

use std::collections::BTreeSet;
use std::str::FromStr;

use anyhow::{bail, Context};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSelection {
    All,
    Pages(BTreeSet<usize>),
}

impl PageSelection {
    pub fn contains(&self, page: usize) -> bool {
        match self {
            PageSelection::All => true,
            PageSelection::Pages(set) => set.contains(&page),
        }
    }
}

impl Default for PageSelection {
    fn default() -> Self {
        PageSelection::All
    }
}

impl FromStr for PageSelection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(PageSelection::All);
        }
        if s.is_empty() {
            bail!("empty page selection");
        }

        let mut set = BTreeSet::new();
        for part in s.split(',') {
            let part = part.trim();
            match part.split_once('-') {
                Some((lo, hi)) => {
                    let lo = parse_page(lo)?;
                    let hi = parse_page(hi)?;
                    if lo > hi {
                        bail!("inverted page range '{part}'");
                    }
                    set.extend(lo..=hi);
                }
                None => {
                    set.insert(parse_page(part)?);
                }
            }
        }
        Ok(PageSelection::Pages(set))
    }
}

fn parse_page(s: &str) -> anyhow::Result<usize> {
    let n: usize = s
        .trim()
        .parse()
        .with_context(|| format!("invalid page number '{s}'"))?;
    if n == 0 {
        bail!("page numbers are 1-based");
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> PageSelection {
        s.parse().unwrap()
    }

    #[test]
    fn all_matches_everything() {
        let sel = parse("all");
        assert!(sel.contains(1));
        assert!(sel.contains(9999));
        assert_eq!(parse("ALL"), PageSelection::All);
    }

    #[test]
    fn single_page() {
        let sel = parse("3");
        assert!(!sel.contains(2));
        assert!(sel.contains(3));
        assert!(!sel.contains(4));
    }

    #[test]
    fn range() {
        let sel = parse("1-3");
        assert!(sel.contains(1));
        assert!(sel.contains(3));
        assert!(!sel.contains(4));
    }

    #[test]
    fn list_and_mix() {
        let sel = parse("1,3,5");
        assert!(sel.contains(5));
        assert!(!sel.contains(4));

        let sel = parse("1-3, 7");
        assert!(sel.contains(2));
        assert!(sel.contains(7));
        assert!(!sel.contains(5));
    }

    #[test]
    fn rejects_bad_input() {
        assert!("".parse::<PageSelection>().is_err());
        assert!("0".parse::<PageSelection>().is_err());
        assert!("3-1".parse::<PageSelection>().is_err());
        assert!("1,x".parse::<PageSelection>().is_err());
    }
}
