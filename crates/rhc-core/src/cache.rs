//! Cache outcome classification.
//!
//! A caching transport reports three boolean signals after each completed
//! request; [`classify`] folds them into a [`CacheOutcome`] for logging and
//! observability. Cache storage itself lives outside this crate — this is
//! the policy surface a caching layer plugs into.

use std::fmt;

/// Signals supplied by the transport/cache layer once a request completes.
///
/// The default (all false) describes a plain origin fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheSignals {
    /// The response body was served from the cache.
    pub served_from_cache: bool,
    /// The cached entry was revalidated with the origin before serving.
    pub revalidated_with_origin: bool,
    /// The response was synthesized by the cache module itself, without
    /// contacting the origin (e.g. a non-cacheable request short-circuited
    /// locally).
    pub module_generated: bool,
}

/// How a completed request was satisfied, cache-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOutcome {
    /// Served from cache without contacting the origin.
    Hit,
    /// Synthesized by the cache module directly.
    ModuleResponse,
    /// Fetched from the origin server.
    Miss,
    /// Served from cache after validating the entry with the origin.
    Validated,
}

impl fmt::Display for CacheOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CacheOutcome::Hit => "served from cache without contacting the origin",
            CacheOutcome::ModuleResponse => "generated by the cache module",
            CacheOutcome::Miss => "fetched from the origin server",
            CacheOutcome::Validated => "served from cache after validating with the origin",
        };
        f.write_str(s)
    }
}

/// Classify a completed request's cache signals. Rules are evaluated in
/// order; module synthesis wins over everything else.
pub fn classify(signals: CacheSignals) -> CacheOutcome {
    if signals.module_generated {
        CacheOutcome::ModuleResponse
    } else if signals.served_from_cache && !signals.revalidated_with_origin {
        CacheOutcome::Hit
    } else if signals.served_from_cache {
        CacheOutcome::Validated
    } else {
        CacheOutcome::Miss
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(served: bool, revalidated: bool, module: bool) -> CacheSignals {
        CacheSignals {
            served_from_cache: served,
            revalidated_with_origin: revalidated,
            module_generated: module,
        }
    }

    #[test]
    fn module_generated_wins_regardless_of_other_flags() {
        for served in [true, false] {
            for revalidated in [true, false] {
                assert_eq!(
                    classify(signals(served, revalidated, true)),
                    CacheOutcome::ModuleResponse
                );
            }
        }
    }

    #[test]
    fn cache_hit_without_revalidation() {
        assert_eq!(classify(signals(true, false, false)), CacheOutcome::Hit);
    }

    #[test]
    fn validated_when_served_after_origin_check() {
        assert_eq!(classify(signals(true, true, false)), CacheOutcome::Validated);
    }

    #[test]
    fn miss_for_plain_origin_fetch() {
        assert_eq!(classify(signals(false, false, false)), CacheOutcome::Miss);
        assert_eq!(classify(CacheSignals::default()), CacheOutcome::Miss);
    }

    #[test]
    fn revalidation_without_cache_serve_is_still_a_miss() {
        assert_eq!(classify(signals(false, true, false)), CacheOutcome::Miss);
    }

    #[test]
    fn classification_is_total_and_deterministic() {
        for served in [true, false] {
            for revalidated in [true, false] {
                for module in [true, false] {
                    let s = signals(served, revalidated, module);
                    assert_eq!(classify(s), classify(s));
                }
            }
        }
    }
}
