use crate::cancel::CancelToken;
use crate::models::{Fixture, MatchDetail};
use crate::player::PlayerCard;
use crate::scene::{
    CardId, DecodedImage, ImageId, ImageRuntime, MatchFlags, MemoryScene, PitchNode, Scene, SceneError,
    ScoreCardView, Side,
};
use crate::source::BoardDataSource;
use crate::{BoardError, BoardResult};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Barrier;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

const CORRUPT: &[u8] = b"corrupt";

/// Data source answering from canned payloads and counting calls.
#[derive(Default)]
pub struct ScriptedSource {
    rounds: Vec<String>,
    fixtures: HashMap<String, Vec<Fixture>>,
    matches: HashMap<u64, MatchDetail>,
    images: HashMap<String, Vec<u8>>,
    pub round_calls: AtomicUsize,
    pub fixture_calls: AtomicUsize,
    pub match_calls: AtomicUsize,
    pub image_calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new() -> Self {
        ScriptedSource::default()
    }

    pub fn logo(team_id: u64) -> String {
        format!("https://media.api-sports.io/football/teams/{team_id}.png")
    }

    pub fn with_current_round(mut self, name: &str) -> Self {
        self.rounds = vec![name.to_string()];
        self
    }

    pub fn with_round(mut self, name: &str, fixtures: Vec<Fixture>) -> Self {
        self.fixtures.insert(name.to_string(), fixtures);
        self
    }

    pub fn with_match(mut self, fixture_id: u64, detail: MatchDetail) -> Self {
        self.matches.insert(fixture_id, detail);
        self
    }

    pub fn with_image(mut self, url: &str) -> Self {
        self.images.insert(url.to_string(), b"png".to_vec());
        self
    }

    pub fn with_corrupt_image(mut self, url: &str) -> Self {
        self.images.insert(url.to_string(), CORRUPT.to_vec());
        self
    }

    pub fn calls(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BoardDataSource for ScriptedSource {
    async fn rounds(&self, _current_only: bool) -> BoardResult<Vec<String>> {
        self.round_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.rounds.clone())
    }

    async fn fixtures(&self, round: &str) -> BoardResult<Vec<Fixture>> {
        self.fixture_calls.fetch_add(1, Ordering::SeqCst);
        self.fixtures
            .get(round)
            .cloned()
            .ok_or_else(|| BoardError::Source(format!("unknown round {round}")))
    }

    async fn match_detail(&self, fixture_id: u64) -> BoardResult<MatchDetail> {
        self.match_calls.fetch_add(1, Ordering::SeqCst);
        self.matches
            .get(&fixture_id)
            .cloned()
            .ok_or_else(|| BoardError::Source(format!("unknown fixture {fixture_id}")))
    }

    async fn image(&self, url: &str) -> BoardResult<Vec<u8>> {
        self.image_calls.fetch_add(1, Ordering::SeqCst);
        self.images
            .get(url)
            .cloned()
            .ok_or_else(|| BoardError::Source(format!("no image at {url}")))
    }
}

/// Image runtime tracking which decoded images are still referenced.
#[derive(Default)]
pub struct CountingRuntime {
    next: AtomicU64,
    live: Mutex<HashSet<u64>>,
}

impl CountingRuntime {
    pub fn live(&self) -> usize {
        self.live.lock().map(|live| live.len()).unwrap_or(0)
    }
}

impl ImageRuntime for CountingRuntime {
    fn decode(&self, bytes: &[u8]) -> Result<ImageId, SceneError> {
        if bytes == CORRUPT {
            return Err(SceneError::Decode(String::from("not an image")));
        }
        let id = self.next.fetch_add(1, Ordering::SeqCst);
        self.live.lock().unwrap().insert(id);
        Ok(ImageId(id))
    }

    fn release(&self, image: ImageId) {
        self.live.lock().unwrap().remove(&image.0);
    }
}

pub fn fixture(id: u64, home: u64, away: u64) -> Fixture {
    fixture_with_status(id, home, away, "NS", None, None)
}

pub fn fixture_with_status(
    id: u64,
    home: u64,
    away: u64,
    short: &str,
    elapsed: Option<u32>,
    extra: Option<u32>,
) -> Fixture {
    serde_json::from_value(json!({
        "fixture": {
            "id": id,
            "date": "2025-08-16T14:00:00+00:00",
            "venue": { "name": "Stadium" },
            "status": { "long": "Not Started", "short": short, "elapsed": elapsed, "extra": extra }
        },
        "teams": {
            "home": { "id": home, "name": format!("Team {home}"), "logo": ScriptedSource::logo(home) },
            "away": { "id": away, "name": format!("Team {away}"), "logo": ScriptedSource::logo(away) }
        },
        "goals": { "home": null, "away": null }
    }))
    .unwrap()
}

/// Lineup JSON for a 4-3-3 whose player ids are `base + 1 ..= base + 11`.
pub fn lineup(team_id: u64, base: u64) -> Value {
    let grids = [
        "1:1", "2:4", "2:3", "2:2", "2:1", "3:3", "3:2", "3:1", "4:3", "4:2", "4:1",
    ];
    let start_xi: Vec<Value> = grids
        .iter()
        .enumerate()
        .map(|(idx, grid)| {
            let id = base + idx as u64 + 1;
            json!({ "player": { "id": id, "name": format!("First Player{id}"), "number": idx + 1, "pos": "D", "grid": grid } })
        })
        .collect();
    let substitutes: Vec<Value> = (12..=16)
        .map(|n| {
            let id = base + n;
            json!({ "player": { "id": id, "name": format!("Sub Player{id}"), "number": n + 10, "pos": "M", "grid": null } })
        })
        .collect();

    json!({
        "team": { "id": team_id, "name": format!("Team {team_id}") },
        "formation": "4-3-3",
        "startXI": start_xi,
        "substitutes": substitutes
    })
}

pub fn event(team_id: u64, kind: &str, detail: &str, player: u64, assist: Option<u64>) -> Value {
    json!({
        "time": { "elapsed": 60, "extra": null },
        "team": { "id": team_id },
        "player": { "id": player, "name": format!("Player{player}") },
        "assist": {
            "id": assist,
            "name": assist.map(|id| format!("Sub Player{id}"))
        },
        "type": kind,
        "detail": detail
    })
}

pub fn match_detail(lineups: Vec<Value>, events: Vec<Value>) -> MatchDetail {
    serde_json::from_value(json!({ "lineups": lineups, "events": events })).unwrap()
}

/// Source whose image reads only complete once every expected read is in flight.
pub struct GatedSource {
    inner: ScriptedSource,
    gate: Barrier,
    pub completed_images: Arc<AtomicUsize>,
}

impl GatedSource {
    pub fn new(inner: ScriptedSource, expected_images: usize) -> Self {
        GatedSource {
            inner,
            gate: Barrier::new(expected_images),
            completed_images: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl BoardDataSource for GatedSource {
    async fn rounds(&self, current_only: bool) -> BoardResult<Vec<String>> {
        self.inner.rounds(current_only).await
    }

    async fn fixtures(&self, round: &str) -> BoardResult<Vec<Fixture>> {
        self.inner.fixtures(round).await
    }

    async fn match_detail(&self, fixture_id: u64) -> BoardResult<MatchDetail> {
        self.inner.match_detail(fixture_id).await
    }

    async fn image(&self, url: &str) -> BoardResult<Vec<u8>> {
        if tokio::time::timeout(Duration::from_secs(1), self.gate.wait()).await.is_err() {
            return Err(BoardError::Source(format!("{url} fetched alone")));
        }

        let bytes = self.inner.image(url).await;
        self.completed_images.fetch_add(1, Ordering::SeqCst);
        bytes
    }
}

/// Memory scene noting how many images had completed at each card creation.
pub struct CreationLog {
    pub scene: MemoryScene,
    completed_images: Arc<AtomicUsize>,
    pub completed_at_create: Vec<usize>,
}

impl CreationLog {
    pub fn new(completed_images: Arc<AtomicUsize>) -> Self {
        CreationLog {
            scene: MemoryScene::new(),
            completed_images,
            completed_at_create: Vec::new(),
        }
    }
}

impl Scene for CreationLog {
    fn set_subtitle(&mut self, subtitle: &str) {
        self.scene.set_subtitle(subtitle);
    }

    fn set_board_loaded(&mut self, loaded: bool) {
        self.scene.set_board_loaded(loaded);
    }

    fn create_card(&mut self) -> Result<CardId, SceneError> {
        self.completed_at_create
            .push(self.completed_images.load(Ordering::SeqCst));
        self.scene.create_card()
    }

    fn write_card(&mut self, card: CardId, view: &ScoreCardView) -> Result<(), SceneError> {
        self.scene.write_card(card, view)
    }

    fn attach_badge(&mut self, card: CardId, side: Side, image: DecodedImage) -> Result<(), SceneError> {
        self.scene.attach_badge(card, side, image)
    }

    fn register_card(&mut self, card: CardId) -> Result<(), SceneError> {
        self.scene.register_card(card)
    }

    fn discard_card(&mut self, card: CardId) {
        self.scene.discard_card(card);
    }

    fn remove_card_at(&mut self, index: usize) -> Result<(), SceneError> {
        self.scene.remove_card_at(index)
    }

    fn card_count(&self) -> usize {
        self.scene.card_count()
    }

    fn write_match_flags(&mut self, card: CardId, flags: MatchFlags) -> Result<(), SceneError> {
        self.scene.write_match_flags(card, flags)
    }

    fn write_formations(&mut self, card: CardId, home: &str, away: &str) -> Result<(), SceneError> {
        self.scene.write_formations(card, home, away)
    }

    fn clear_players(&mut self, card: CardId, side: Side) -> Result<(), SceneError> {
        self.scene.clear_players(card, side)
    }

    fn register_player(&mut self, card: CardId, side: Side, player: &PlayerCard) -> Result<(), SceneError> {
        self.scene.register_player(card, side, player)
    }

    fn write_pitch_node(
        &mut self,
        card: CardId,
        side: Side,
        slot: usize,
        node: &PitchNode,
    ) -> Result<(), SceneError> {
        self.scene.write_pitch_node(card, side, slot, node)
    }
}

/// Source that cancels the given token on its first image read.
pub struct InterruptingSource {
    inner: ScriptedSource,
    handle: Mutex<Option<CancelToken>>,
}

impl InterruptingSource {
    pub fn new(inner: ScriptedSource) -> Self {
        InterruptingSource {
            inner,
            handle: Mutex::new(None),
        }
    }

    pub fn interrupt_on_first_image(&self, handle: CancelToken) {
        *self.handle.lock().unwrap() = Some(handle);
    }

    pub fn image_calls(&self) -> usize {
        ScriptedSource::calls(&self.inner.image_calls)
    }
}

#[async_trait]
impl BoardDataSource for InterruptingSource {
    async fn rounds(&self, current_only: bool) -> BoardResult<Vec<String>> {
        self.inner.rounds(current_only).await
    }

    async fn fixtures(&self, round: &str) -> BoardResult<Vec<Fixture>> {
        self.inner.fixtures(round).await
    }

    async fn match_detail(&self, fixture_id: u64) -> BoardResult<MatchDetail> {
        self.inner.match_detail(fixture_id).await
    }

    async fn image(&self, url: &str) -> BoardResult<Vec<u8>> {
        let handle = self.handle.lock().unwrap().take();
        if let Some(handle) = handle {
            handle.cancel();
        }

        self.inner.image(url).await
    }
}
