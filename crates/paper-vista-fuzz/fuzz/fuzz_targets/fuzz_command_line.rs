#![no_main]

use libfuzzer_sys::fuzz_target;
use paper_vista::controller::Event;
use paper_vista::view::{ViewState, apply};

fuzz_target!(|data: &[u8]| {
    let state = ViewState::default();
    let mut state = state.loaded(Vec::new());
    for line in String::from_utf8_lossy(data).lines() {
        if let Ok(event) = Event::parse(line) {
            state = apply(state, &event);
        }
    }
});
