//! Playback exclusivity tests — drive the controller against a registry
//! that mimics a page of audio elements, one per timeline entry.

use chordscore::{parse_predictions, ClipRegistry, PlaybackController, PlaybackState};
use pretty_assertions::assert_eq;

/// Stand-in for the host's audio elements, addressed by URL.
struct AudioPage {
    urls: Vec<String>,
    playing: Vec<bool>,
    position: Vec<f64>,
    pauses: usize,
}

impl AudioPage {
    fn new(urls: Vec<String>) -> Self {
        let n = urls.len();
        Self {
            urls,
            playing: vec![false; n],
            position: vec![0.0; n],
            pauses: 0,
        }
    }

    fn handle(&self, url: &str) -> usize {
        self.urls.iter().position(|u| u == url).unwrap()
    }

    /// Advance every playing clip by `secs`.
    fn tick(&mut self, secs: f64) {
        for (p, playing) in self.position.iter_mut().zip(&self.playing) {
            if *playing {
                *p += secs;
            }
        }
    }

    fn audible(&self) -> usize {
        self.playing.iter().filter(|p| **p).count()
    }
}

impl ClipRegistry for AudioPage {
    type Handle = usize;

    fn playing_except(&self, handle: usize) -> Vec<usize> {
        self.playing
            .iter()
            .enumerate()
            .filter(|(h, playing)| **playing && *h != handle)
            .map(|(h, _)| h)
            .collect()
    }

    fn pause(&mut self, handle: usize) {
        self.playing[handle] = false;
        self.pauses += 1;
    }

    fn rewind(&mut self, handle: usize) {
        self.position[handle] = 0.0;
    }

    fn play(&mut self, handle: usize) {
        self.playing[handle] = true;
    }
}

fn page_from_fixture() -> AudioPage {
    let events = parse_predictions(
        r#"[{"time": 0, "label": "C", "audioUrl": "a.wav"},
            {"time": 1, "label": "G", "audioUrl": "b.wav"},
            {"time": 2, "label": "Am"}]"#,
    )
    .unwrap();
    AudioPage::new(events.into_iter().filter_map(|e| e.audio_url).collect())
}

#[test]
fn switching_clips_pauses_the_previous_one() {
    let mut page = page_from_fixture();
    let (a, b) = (page.handle("a.wav"), page.handle("b.wav"));
    let mut ctl = PlaybackController::new();

    ctl.request_play(&mut page, a);
    page.tick(0.8);
    ctl.request_play(&mut page, b);

    assert!(!page.playing[a], "A should be paused");
    assert!(page.playing[b], "B should be playing");
    assert_eq!(page.position[b], 0.0);
    assert_eq!(page.position[a], 0.8, "pausing keeps A's position");
    assert_eq!(ctl.state(), PlaybackState::Playing(b));
}

#[test]
fn replaying_after_idle_restarts_from_zero_without_pauses() {
    let mut page = page_from_fixture();
    let (a, b) = (page.handle("a.wav"), page.handle("b.wav"));
    let mut ctl = PlaybackController::new();

    ctl.request_play(&mut page, a);
    ctl.request_play(&mut page, b);
    page.tick(1.0);
    ctl.stop(&mut page);
    let pauses_before = page.pauses;

    ctl.request_play(&mut page, a);
    assert_eq!(page.pauses, pauses_before, "nothing else was playing");
    assert_eq!(page.position[a], 0.0);
    assert!(page.playing[a]);
    assert_eq!(page.audible(), 1);
}

#[test]
fn never_more_than_one_audible_clip() {
    let mut page = page_from_fixture();
    let mut ctl = PlaybackController::new();
    for h in [0, 1, 1, 0, 1, 0, 0] {
        ctl.request_play(&mut page, h);
        page.tick(0.1);
        assert_eq!(page.audible(), 1);
    }
}

#[test]
fn state_serializes_for_the_host() {
    let json = serde_json::to_string(&PlaybackState::Playing(3usize)).unwrap();
    assert_eq!(json, r#"{"state":"playing","clip":3}"#);
    let idle = serde_json::to_string(&PlaybackState::<usize>::Idle).unwrap();
    assert_eq!(idle, r#"{"state":"idle"}"#);
}
