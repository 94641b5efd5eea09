use crate::loader::RoundLoader;
use crate::palette::TeamPalette;
use crate::reconciler::{MatchDetailReconciler, MatchDetailState, ReconcileOutcome};
use crate::round::Round;
use crate::scene::{CardId, ImageRuntime, Scene};
use crate::source::BoardDataSource;
use crate::{BoardConfig, BoardError, BoardResult};
use log::{debug, error, info};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSlot {
    pub card: CardId,
    pub fixture_id: u64,
    pub detail: MatchDetailState,
}

/// One viewer's scoreboard: the scene it drives and the state behind it.
pub struct BoardSession<S: Scene> {
    scene: S,
    source: Arc<dyn BoardDataSource>,
    loader: RoundLoader,
    reconciler: MatchDetailReconciler,
    initialized: bool,
    is_loading: bool,
    current: Option<Round>,
    cards: Vec<CardSlot>,
}

impl<S: Scene> BoardSession<S> {
    pub fn new(
        scene: S,
        source: Arc<dyn BoardDataSource>,
        images: Arc<dyn ImageRuntime>,
        palette: Arc<TeamPalette>,
        config: &BoardConfig,
    ) -> Self {
        BoardSession {
            scene,
            loader: RoundLoader::new(Arc::clone(&source), images, config.reveal_delay),
            reconciler: MatchDetailReconciler::new(Arc::clone(&source), palette),
            source,
            initialized: false,
            is_loading: false,
            current: None,
            cards: Vec::new(),
        }
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.current.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn cards(&self) -> &[CardSlot] {
        &self.cards
    }

    /// Loads the league's current round. Runs once; a failure allows another try.
    pub async fn initialize(&mut self) -> BoardResult<bool> {
        if self.initialized {
            return Ok(false);
        }
        self.initialized = true;

        match self.load_current_round().await {
            Ok(()) => Ok(true),
            Err(e) => {
                error!("board initialization failed: {e}");
                self.initialized = false;
                Err(e)
            }
        }
    }

    async fn load_current_round(&mut self) -> BoardResult<()> {
        let rounds = self.source.rounds(true).await?;
        let name = rounds.first().ok_or(BoardError::NoCurrentRound)?;
        let round = Round::parse(name)?;

        info!("current round: {}", round.name);

        self.show_round(&round);
        self.is_loading = true;
        self.load(round).await
    }

    /// Claims the previous round, or `None` while loading or at week one.
    pub fn request_previous(&mut self) -> Option<Round> {
        let target = self.current.as_ref()?.previous()?;
        self.claim(target)
    }

    /// Claims the next round, or `None` while loading or at the last week.
    pub fn request_next(&mut self) -> Option<Round> {
        let target = self.current.as_ref()?.next()?;
        self.claim(target)
    }

    fn claim(&mut self, target: Round) -> Option<Round> {
        if self.is_loading {
            debug!("round change to {} ignored while loading", target.week);
            return None;
        }

        self.is_loading = true;
        self.show_round(&target);
        Some(target)
    }

    fn show_round(&mut self, round: &Round) {
        self.scene.set_subtitle(&round.subtitle());
        self.current = Some(round.clone());
    }

    /// Loads a round claimed with `request_previous` or `request_next`.
    pub async fn load(&mut self, round: Round) -> BoardResult<()> {
        self.cards.clear();

        let result = self.loader.load(&mut self.scene, &round.name).await;
        self.is_loading = false;

        let report = result?;
        self.cards = report
            .cards
            .into_iter()
            .map(|loaded| CardSlot {
                card: loaded.card,
                fixture_id: loaded.fixture_id,
                detail: MatchDetailState::default(),
            })
            .collect();

        Ok(())
    }

    pub async fn previous_round(&mut self) -> BoardResult<bool> {
        match self.request_previous() {
            Some(round) => self.load(round).await.map(|_| true),
            None => Ok(false),
        }
    }

    pub async fn next_round(&mut self) -> BoardResult<bool> {
        match self.request_next() {
            Some(round) => self.load(round).await.map(|_| true),
            None => Ok(false),
        }
    }

    /// Lineups and formations of one card; both triggers land here.
    pub async fn open_match(&mut self, card: CardId) -> Option<ReconcileOutcome> {
        let slot = self.cards.iter_mut().find(|slot| slot.card == card)?;

        let outcome = self
            .reconciler
            .reconcile(&mut self.scene, slot.card, slot.fixture_id, &mut slot.detail)
            .await;

        Some(outcome)
    }

    /// Retires every card and releases pending images.
    pub fn shutdown(&mut self) {
        self.loader.shutdown(&mut self.scene);
        self.cards.clear();
    }
}
