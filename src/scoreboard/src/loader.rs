use crate::cancel::CancelToken;
use crate::models::Fixture;
use crate::scene::{CardId, DecodedImage, ImageRuntime, Scene, ScoreCardView, Side};
use crate::source::BoardDataSource;
use crate::BoardResult;
use futures::future::join_all;
use log::{debug, error, info, warn};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadedCard {
    pub card: CardId,
    pub fixture_id: u64,
}

#[derive(Debug, Default)]
pub struct RoundReport {
    pub cards: Vec<LoadedCard>,
    pub fixtures: usize,
    pub skipped: usize,
}

#[derive(Debug, Default)]
struct Badges {
    home: Option<DecodedImage>,
    away: Option<DecodedImage>,
}

impl Badges {
    fn into_sides(self) -> impl Iterator<Item = (Side, DecodedImage)> {
        [(Side::Home, self.home), (Side::Away, self.away)]
            .into_iter()
            .filter_map(|(side, image)| image.map(|image| (side, image)))
    }
}

/// Pending work of the last load: its token and images nobody took.
#[derive(Debug, Default)]
struct RoundCleanup {
    token: CancelToken,
    leftovers: Vec<DecodedImage>,
}

impl RoundCleanup {
    fn run(self) {
        self.token.cancel();
        if !self.leftovers.is_empty() {
            debug!("releasing {} unattached badge images", self.leftovers.len());
        }
    }
}

/// Replaces the displayed score cards with the fixtures of one round.
pub struct RoundLoader {
    source: Arc<dyn BoardDataSource>,
    images: Arc<dyn ImageRuntime>,
    reveal_delay: Duration,
    active_cards: usize,
    interrupt: CancelToken,
    cleanup: Option<RoundCleanup>,
}

impl RoundLoader {
    pub fn new(
        source: Arc<dyn BoardDataSource>,
        images: Arc<dyn ImageRuntime>,
        reveal_delay: Duration,
    ) -> Self {
        RoundLoader {
            source,
            images,
            reveal_delay,
            active_cards: 0,
            interrupt: CancelToken::new(),
            cleanup: None,
        }
    }

    pub fn active_cards(&self) -> usize {
        self.active_cards
    }

    /// Token of whichever load is running. Cancelling it stops that load's
    /// badge fetches and remaining reveals; the next load re-arms it.
    pub fn interrupt_handle(&self) -> CancelToken {
        self.interrupt.clone()
    }

    pub async fn load<S: Scene>(&mut self, scene: &mut S, round: &str) -> BoardResult<RoundReport> {
        self.cancel_pending();
        self.interrupt.reset();
        self.retire_cards(scene);

        scene.set_board_loaded(false);

        let fixtures = self.source.fixtures(round).await?;
        if fixtures.is_empty() {
            warn!("no fixtures for round '{round}'");
            return Ok(RoundReport::default());
        }

        scene.set_board_loaded(true);

        let token = self.interrupt.clone();
        self.cleanup = Some(RoundCleanup {
            token: token.clone(),
            leftovers: Vec::new(),
        });

        let badges = prefetch_badges(self.source.as_ref(), &self.images, &fixtures, &token).await;

        let mut leftovers = Vec::new();
        let mut seen = HashSet::with_capacity(fixtures.len());
        let mut report = RoundReport {
            fixtures: fixtures.len(),
            ..RoundReport::default()
        };

        for (fixture, badges) in fixtures.iter().zip(badges) {
            if token.is_cancelled() {
                leftovers.extend(badges.into_sides().map(|(_, image)| image));
                report.skipped += 1;
                continue;
            }

            if !seen.insert(fixture.id()) {
                warn!("fixture {} listed twice, keeping the first card", fixture.id());
                leftovers.extend(badges.into_sides().map(|(_, image)| image));
                report.skipped += 1;
                continue;
            }

            match self.reveal(scene, fixture, badges, &mut leftovers) {
                Some(card) => report.cards.push(LoadedCard {
                    card,
                    fixture_id: fixture.id(),
                }),
                None => report.skipped += 1,
            }

            if !self.reveal_delay.is_zero() {
                tokio::time::sleep(self.reveal_delay).await;
            }
        }

        self.cleanup = Some(RoundCleanup { token, leftovers });

        info!(
            "round '{}': {} cards shown, {} skipped",
            round,
            report.cards.len(),
            report.skipped
        );

        Ok(report)
    }

    /// Removes every card this loader put on screen, best effort.
    pub fn retire_cards<S: Scene>(&mut self, scene: &mut S) -> usize {
        let to_remove = self.active_cards;
        let mut removed = 0;

        for attempt in 0..to_remove {
            match scene.remove_card_at(0) {
                Ok(()) => removed += 1,
                Err(e) => error!("removing card {attempt} failed: {e}"),
            }
        }

        self.active_cards = self.active_cards.saturating_sub(removed);
        removed
    }

    pub fn cancel_pending(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup.run();
        }
    }

    pub fn shutdown<S: Scene>(&mut self, scene: &mut S) {
        self.cancel_pending();
        self.retire_cards(scene);
    }

    fn reveal<S: Scene>(
        &mut self,
        scene: &mut S,
        fixture: &Fixture,
        badges: Badges,
        leftovers: &mut Vec<DecodedImage>,
    ) -> Option<CardId> {
        let card = match scene.create_card() {
            Ok(card) => card,
            Err(e) => {
                error!("creating card for fixture {} failed: {e}", fixture.id());
                leftovers.extend(badges.into_sides().map(|(_, image)| image));
                return None;
            }
        };

        let registered = scene
            .write_card(card, &score_card_view(fixture))
            .and_then(|_| scene.register_card(card));

        if let Err(e) = registered {
            error!("adding card for fixture {} failed: {e}", fixture.id());
            scene.discard_card(card);
            leftovers.extend(badges.into_sides().map(|(_, image)| image));
            return None;
        }

        self.active_cards += 1;

        for (side, image) in badges.into_sides() {
            if let Err(e) = scene.attach_badge(card, side, image) {
                warn!("{side} badge for fixture {} not attached: {e}", fixture.id());
            }
        }

        Some(card)
    }
}

pub fn score_card_view(fixture: &Fixture) -> ScoreCardView {
    let live = fixture.live_status();

    ScoreCardView {
        fixture_id: fixture.id().to_string(),
        venue_name: fixture.venue_name().to_string(),
        date: fixture.kickoff_date(),
        time: fixture.kickoff_time(),
        match_status: fixture.fixture.status.long.clone(),
        is_live: live.is_live,
        live_display: live.label,
        home_team: fixture.teams.home.name.clone(),
        away_team: fixture.teams.away.name.clone(),
        home_score: fixture.home_score(),
        away_score: fixture.away_score(),
    }
}

async fn prefetch_badges(
    source: &dyn BoardDataSource,
    runtime: &Arc<dyn ImageRuntime>,
    fixtures: &[Fixture],
    token: &CancelToken,
) -> Vec<Badges> {
    join_all(fixtures.iter().map(|fixture| async move {
        let (home, away) = futures::join!(
            fetch_badge(source, runtime, &fixture.teams.home.logo, token),
            fetch_badge(source, runtime, &fixture.teams.away.logo, token),
        );
        Badges { home, away }
    }))
    .await
}

async fn fetch_badge(
    source: &dyn BoardDataSource,
    runtime: &Arc<dyn ImageRuntime>,
    url: &str,
    token: &CancelToken,
) -> Option<DecodedImage> {
    if url.is_empty() || token.is_cancelled() {
        return None;
    }

    let bytes = match source.image(url).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("badge fetch failed for {url}: {e}");
            return None;
        }
    };

    if token.is_cancelled() {
        return None;
    }

    let image = match DecodedImage::decode(runtime, &bytes) {
        Ok(image) => image,
        Err(e) => {
            warn!("badge decode failed for {url}: {e}");
            return None;
        }
    };

    // Dropping a decoded image releases it.
    if token.is_cancelled() {
        return None;
    }

    Some(image)
}
