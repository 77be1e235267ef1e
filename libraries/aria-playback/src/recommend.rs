//! Recommendation stub
//!
//! A deterministic weighting over the catalog, used by smart shuffle to top
//! up the queue. This is a placeholder for a real recommendation service:
//! genre match, artist match, a popularity stand-in (currently a random
//! catalog sample), and one discovery pick.

use aria_core::{Song, SongId};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Maximum number of songs a single recommendation call returns
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Up to this many same-genre matches
const GENRE_PICKS: usize = 3;

/// Up to this many same-artist matches
const ARTIST_PICKS: usize = 2;

/// Up to this many general-pool ("popular") picks
const POPULAR_PICKS: usize = 2;

/// Recommend songs related to `current`, drawn from `pool`
///
/// Weighting, in order: up to 3 same-genre, up to 2 same-artist, up to 2
/// from the general pool, and 1 fully random discovery pick, each stage
/// deduplicated against earlier ones, capped at [`MAX_RECOMMENDATIONS`].
/// Songs whose ID is in `exclude` (or matches `current`) are never returned.
/// An exhausted pool simply yields fewer results; an empty pool yields none.
pub fn recommend<R: Rng + ?Sized>(
    current: &Song,
    exclude: &HashSet<SongId>,
    pool: &[Song],
    rng: &mut R,
) -> Vec<Song> {
    let mut picked: Vec<Song> = Vec::new();
    let mut picked_ids: HashSet<SongId> = HashSet::new();

    // Same genre
    if current.genre.is_some() {
        let candidates = eligible(pool, current, exclude, &picked_ids, |s| {
            s.same_genre(current)
        });
        take_random(candidates, GENRE_PICKS, rng, &mut picked, &mut picked_ids);
    }

    // Same artist, deduplicated against genre matches
    if current.artist_name().is_some() {
        let candidates = eligible(pool, current, exclude, &picked_ids, |s| {
            s.same_artist(current)
        });
        take_random(candidates, ARTIST_PICKS, rng, &mut picked, &mut picked_ids);
    }

    // Popularity placeholder: a random sample of whatever remains
    let candidates = eligible(pool, current, exclude, &picked_ids, |_| true);
    take_random(candidates, POPULAR_PICKS, rng, &mut picked, &mut picked_ids);

    // One discovery pick from the remainder
    let candidates = eligible(pool, current, exclude, &picked_ids, |_| true);
    if let Some(song) = candidates.choose(rng) {
        picked_ids.insert(song.id.clone());
        picked.push((*song).clone());
    }

    picked.truncate(MAX_RECOMMENDATIONS);
    picked
}

/// Pool entries passing `pred` that are not excluded or already picked
fn eligible<'a, F>(
    pool: &'a [Song],
    current: &Song,
    exclude: &HashSet<SongId>,
    picked_ids: &HashSet<SongId>,
    pred: F,
) -> Vec<&'a Song>
where
    F: Fn(&Song) -> bool,
{
    pool.iter()
        .filter(|s| {
            s.id != current.id
                && !exclude.contains(&s.id)
                && !picked_ids.contains(&s.id)
                && pred(s)
        })
        .collect()
}

/// Move up to `limit` random candidates into the picked set
fn take_random<R: Rng + ?Sized>(
    mut candidates: Vec<&Song>,
    limit: usize,
    rng: &mut R,
    picked: &mut Vec<Song>,
    picked_ids: &mut HashSet<SongId>,
) {
    candidates.shuffle(rng);
    for song in candidates.into_iter().take(limit) {
        picked_ids.insert(song.id.clone());
        picked.push(song.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aria_core::{ArtistId, ArtistRef};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn song(id: &str, genre: Option<&str>, artist: Option<&str>) -> Song {
        let mut song = Song::new(format!("Song {id}"), 180);
        song.id = SongId::new(id);
        song.genre = genre.map(String::from);
        song.artist = artist.map(|name| ArtistRef::new(ArtistId::new(name), name));
        song
    }

    fn ids(songs: &[Song]) -> Vec<&str> {
        songs.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn empty_pool_yields_empty_result() {
        let current = song("c", Some("Pop"), Some("A"));
        let mut rng = StdRng::seed_from_u64(1);
        let result = recommend(&current, &HashSet::new(), &[], &mut rng);
        assert!(result.is_empty());
    }

    #[test]
    fn never_returns_excluded_or_current() {
        let current = song("c", Some("Pop"), Some("A"));
        let pool = vec![
            song("c", Some("Pop"), Some("A")), // current itself in the pool
            song("1", Some("Pop"), Some("A")),
            song("2", Some("Pop"), Some("B")),
            song("3", Some("Rock"), Some("A")),
            song("4", Some("Rock"), Some("C")),
        ];
        let exclude: HashSet<SongId> = [SongId::new("1"), SongId::new("3")].into();

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let result = recommend(&current, &exclude, &pool, &mut rng);
            for s in &result {
                assert_ne!(s.id.as_str(), "c");
                assert!(!exclude.contains(&s.id), "excluded id returned: {}", s.id);
            }
        }
    }

    #[test]
    fn capped_at_five() {
        let current = song("c", Some("Pop"), Some("A"));
        let pool: Vec<Song> = (0..30)
            .map(|i| song(&format!("{i}"), Some("Pop"), Some("A")))
            .collect();

        let mut rng = StdRng::seed_from_u64(3);
        let result = recommend(&current, &HashSet::new(), &pool, &mut rng);
        assert_eq!(result.len(), MAX_RECOMMENDATIONS);
    }

    #[test]
    fn no_duplicate_picks() {
        let current = song("c", Some("Pop"), Some("A"));
        let pool = vec![
            song("1", Some("Pop"), Some("A")),
            song("2", Some("Pop"), Some("A")),
            song("3", Some("Rock"), Some("B")),
        ];

        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let result = recommend(&current, &HashSet::new(), &pool, &mut rng);
            let unique: HashSet<&str> = result.iter().map(|s| s.id.as_str()).collect();
            assert_eq!(unique.len(), result.len(), "duplicate in {:?}", ids(&result));
        }
    }

    #[test]
    fn genre_matches_lead_the_result() {
        let current = song("c", Some("Pop"), None);
        let pool = vec![
            song("rock", Some("Rock"), None),
            song("pop1", Some("Pop"), None),
            song("pop2", Some("Pop"), None),
            song("pop3", Some("Pop"), None),
        ];

        let mut rng = StdRng::seed_from_u64(5);
        let result = recommend(&current, &HashSet::new(), &pool, &mut rng);

        // Three genre slots filled first, all Pop
        assert!(result.len() >= 3);
        for s in &result[..3] {
            assert_eq!(s.genre.as_deref(), Some("Pop"));
        }
    }

    #[test]
    fn works_without_genre_or_artist() {
        let current = song("c", None, None);
        let pool = vec![song("1", None, None), song("2", None, None)];

        let mut rng = StdRng::seed_from_u64(9);
        let result = recommend(&current, &HashSet::new(), &pool, &mut rng);
        // Falls through to general-pool and discovery picks
        assert_eq!(result.len(), 2);
    }
}
