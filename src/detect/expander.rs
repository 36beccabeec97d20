//! Search-domain expansion of short names.

/// Lazily yields the candidates to try for `candidate`.
///
/// A dotted candidate is taken as already qualified and yields only itself.
/// A short one yields itself, then `candidate.domain` for each search domain
/// in order. Blank and repeated domains are skipped, so nothing is yielded
/// twice. At most `search_domains.len() + 1` items; calling `expand` again
/// with the same inputs yields the same sequence.
pub fn expand<'a>(candidate: &'a str, search_domains: &'a [String]) -> Expansions<'a> {
    let domains = if candidate.contains('.') {
        &[][..]
    } else {
        search_domains
    };
    Expansions {
        candidate,
        domains,
        next_domain: 0,
        yielded_self: false,
    }
}

/// Iterator returned by [`expand`].
#[derive(Debug, Clone)]
pub struct Expansions<'a> {
    candidate: &'a str,
    domains: &'a [String],
    next_domain: usize,
    yielded_self: bool,
}

impl Expansions<'_> {
    fn seen_before(&self, index: usize, domain: &str) -> bool {
        self.domains[..index]
            .iter()
            .any(|earlier| normalize_domain(earlier).eq_ignore_ascii_case(domain))
    }
}

fn normalize_domain(domain: &str) -> &str {
    domain.trim().trim_matches('.')
}

impl Iterator for Expansions<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if !self.yielded_self {
            self.yielded_self = true;
            return Some(self.candidate.to_string());
        }
        while self.next_domain < self.domains.len() {
            let index = self.next_domain;
            self.next_domain += 1;

            let domain = normalize_domain(&self.domains[index]);
            if domain.is_empty() || self.seen_before(index, domain) {
                continue;
            }
            return Some(format!("{}.{}", self.candidate, domain));
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.domains.len() - self.next_domain;
        let own = usize::from(!self.yielded_self);
        (own, Some(own + remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domains(list: &[&str]) -> Vec<String> {
        list.iter().map(|d| d.to_string()).collect()
    }

    #[test]
    fn test_short_name_expands_in_order() {
        let search = domains(&["example.com", "internal"]);
        let got: Vec<_> = expand("host", &search).collect();
        assert_eq!(got, ["host", "host.example.com", "host.internal"]);
    }

    #[test]
    fn test_dotted_name_is_not_expanded() {
        let search = domains(&["example.com", "internal"]);
        let got: Vec<_> = expand("host.example.com", &search).collect();
        assert_eq!(got, ["host.example.com"]);
    }

    #[test]
    fn test_no_search_domains() {
        let got: Vec<_> = expand("host", &[]).collect();
        assert_eq!(got, ["host"]);
    }

    #[test]
    fn test_skips_blank_and_repeated_domains() {
        let search = domains(&["example.com", "", ".", "Example.COM.", "internal", "internal"]);
        let got: Vec<_> = expand("host", &search).collect();
        assert_eq!(got, ["host", "host.example.com", "host.internal"]);
    }

    #[test]
    fn test_bounded_and_restartable() {
        let search = domains(&["a", "b", "c"]);
        let first = expand("host", &search);
        assert_eq!(first.size_hint(), (1, Some(4)));

        let replay = first.clone();
        let once: Vec<_> = first.collect();
        let twice: Vec<_> = replay.collect();
        assert_eq!(once.len(), 4);
        assert_eq!(once, twice);
    }
}
