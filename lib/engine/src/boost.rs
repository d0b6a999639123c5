//! Season boosting: a fixed additive bonus for rows matching the user's
//! preferred season.

use crate::score::ScoredItem;
use citrusmatch_core::Season;

/// Default bonus added to the score of season-matching rows.
///
/// Small on purpose: the preference should nudge ranking, not override
/// feature similarity.
pub const DEFAULT_SEASON_BOOST: f32 = 0.03;

/// Add the season bonus to matching rows, then clip every score into
/// [0, 1].
///
/// With no preference the bonus stage is skipped entirely; an empty
/// preference never matches rows with empty season sets. The clip runs on
/// every row whether or not it was boosted.
pub fn apply_season_boost(
    scored: &mut [ScoredItem<'_>],
    season_pref: Option<Season>,
    bonus: f32,
) {
    if let Some(season) = season_pref {
        for row in scored.iter_mut() {
            if row.item.seasons.contains(season) {
                row.score += bonus;
            }
        }
    }
    for row in scored.iter_mut() {
        row.score = row.score.clamp(0.0, 1.0);
    }
}
