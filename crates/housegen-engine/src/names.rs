//! Community names, unique across the whole store.

use std::collections::HashSet;

use rand::Rng;

pub const COMMUNITY_PREFIXES: [&str; 30] = [
    "阳光", "锦绣", "万科", "保利", "金地", "龙湖", "华润", "融创", "绿城", "中海", "远洋", "首开",
    "城建", "天鸿", "世纪", "恒通", "博雅", "雅居", "幸福", "和平", "康乐", "怡景", "翠湖", "紫金",
    "银座", "万达", "恒基", "润泽", "观澜", "御景",
];

pub const COMMUNITY_SUFFIXES: [&str; 19] = [
    "家园", "里", "小区", "苑", "园", "嘉园", "花园", "庭", "府", "居", "舍", "轩", "阁", "湾",
    "悦", "锦园", "华府", "国际", "公馆",
];

/// Chance a drawn name gets a `<n>区` phase suffix.
const PHASE_PROBABILITY: f64 = 0.3;
const MAX_PHASE: u32 = 9;

/// Mints community names that have not been used before.
#[derive(Debug, Clone, Default)]
pub struct CommunityNamer {
    used: HashSet<String>,
    attempts: u32,
}

impl CommunityNamer {
    /// `used` seeds the set with every name already in the store.
    #[must_use]
    pub const fn new(used: HashSet<String>, attempts: u32) -> Self {
        Self { used, attempts }
    }

    #[must_use]
    pub fn is_used(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.used.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// Draw a fresh name and record it as used.
    ///
    /// After the configured number of colliding draws, falls back to
    /// `<district>小区<k>` with the smallest unused `k`.
    pub fn mint<R: Rng + ?Sized>(&mut self, rng: &mut R, district: &str) -> String {
        for _ in 0..self.attempts {
            let candidate = draw(rng);
            if !self.used.contains(&candidate) {
                self.used.insert(candidate.clone());
                return candidate;
            }
        }

        let name = self.fallback(district);
        tracing::debug!(%name, district, "community name draws exhausted, using fallback");
        self.used.insert(name.clone());
        name
    }

    fn fallback(&self, district: &str) -> String {
        let mut k: u64 = 1;
        loop {
            let candidate = format!("{district}小区{k}");
            if !self.used.contains(&candidate) {
                return candidate;
            }
            k += 1;
        }
    }
}

fn draw<R: Rng + ?Sized>(rng: &mut R) -> String {
    let prefix = COMMUNITY_PREFIXES[rng.gen_range(0..COMMUNITY_PREFIXES.len())];
    let suffix = COMMUNITY_SUFFIXES[rng.gen_range(0..COMMUNITY_SUFFIXES.len())];
    if rng.gen_bool(PHASE_PROBABILITY) {
        let phase = rng.gen_range(1..=MAX_PHASE);
        format!("{prefix}{suffix}{phase}区")
    } else {
        format!("{prefix}{suffix}")
    }
}
