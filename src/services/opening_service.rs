use std::collections::HashMap;

use crate::{
    config::DEFAULT_SCAN_CAP,
    models::{
        game::Outcome,
        pgn::PgnGame,
        stats::{OpeningStat, percentage},
    },
    services::stats_client::StatsSource,
};

pub const FAVORITE_OPENINGS: usize = 5;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct OpeningTally {
    name: String,
    wins: u32,
    losses: u32,
    draws: u32,
    total: u32,
}

/// Win/loss/draw counts per opening, kept in first-seen order.
#[derive(Debug, Default)]
pub struct OpeningBook {
    tallies: Vec<OpeningTally>,
    index: HashMap<String, usize>,
    scanned: usize,
}

impl OpeningBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Games that were tallied so far.
    pub fn scanned(&self) -> usize {
        self.scanned
    }

    /// Tallies one PGN record for `external_id`. Returns false when the record
    /// was skipped (empty, unreadable or without an opening).
    pub fn record(&mut self, external_id: &str, pgn: &str) -> bool {
        let Some(game) = PgnGame::parse(pgn) else {
            tracing::debug!("skipping unreadable pgn record");
            return false;
        };
        let Some(opening) = game.opening() else {
            return false;
        };
        let slot = match self.index.get(&opening).copied() {
            Some(i) => i,
            None => {
                self.tallies.push(OpeningTally {
                    name: opening.clone(),
                    ..Default::default()
                });
                self.index.insert(opening, self.tallies.len() - 1);
                self.tallies.len() - 1
            }
        };
        let tally = &mut self.tallies[slot];
        match game.result().outcome_for(game.side_of(external_id)) {
            Some(Outcome::Win) => tally.wins += 1,
            Some(Outcome::Loss) => tally.losses += 1,
            Some(Outcome::Draw) => tally.draws += 1,
            None => {}
        }
        tally.total += 1;
        self.scanned += 1;
        true
    }

    /// Most played openings, at most five. Equal totals keep first-seen order.
    pub fn favorites(&self) -> Vec<OpeningStat> {
        let mut ranked: Vec<&OpeningTally> = self.tallies.iter().collect();
        ranked.sort_by(|a, b| b.total.cmp(&a.total));
        ranked
            .into_iter()
            .take(FAVORITE_OPENINGS)
            .map(|t| OpeningStat {
                name: t.name.clone(),
                games: t.total,
                win_rate: percentage(t.wins.into(), t.total.into()),
            })
            .collect()
    }
}

/// Scans a player's archives, newest archive first, and ranks their openings.
pub struct OpeningAnalyzer<'a> {
    source: &'a dyn StatsSource,
    scan_cap: usize,
}

impl<'a> OpeningAnalyzer<'a> {
    pub fn new(source: &'a dyn StatsSource) -> Self {
        Self {
            source,
            scan_cap: DEFAULT_SCAN_CAP,
        }
    }

    pub fn with_scan_cap(mut self, scan_cap: usize) -> Self {
        self.scan_cap = scan_cap;
        self
    }

    pub async fn scan(&self, external_id: &str, archive_urls: &[String]) -> OpeningBook {
        let mut book = OpeningBook::new();
        'archives: for url in archive_urls.iter().rev() {
            if book.scanned() >= self.scan_cap {
                break;
            }
            let games = self.source.archive_games(url).await;
            for game in games {
                if book.scanned() >= self.scan_cap {
                    break 'archives;
                }
                book.record(external_id, &game.pgn);
            }
        }
        tracing::debug!(
            "scanned {} games for {} across {} archives",
            book.scanned(),
            external_id,
            archive_urls.len()
        );
        book
    }

    pub async fn favorite_openings(
        &self,
        external_id: &str,
        archive_urls: &[String],
    ) -> Vec<OpeningStat> {
        self.scan(external_id, archive_urls).await.favorites()
    }
}
