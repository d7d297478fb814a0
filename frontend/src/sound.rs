use web_sys::{HtmlMediaElement, HtmlVideoElement};

/// Something with a playback mute flag.
pub trait MuteFlag {
    fn is_muted(&self) -> bool;
    fn set_mute(&self, muted: bool);
}

impl MuteFlag for HtmlVideoElement {
    fn is_muted(&self) -> bool {
        HtmlMediaElement::muted(self)
    }

    fn set_mute(&self, muted: bool) {
        HtmlMediaElement::set_muted(self, muted)
    }
}

/// Mute state of the mobile hero video as shown to the visitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SoundState {
    pub muted: bool,
}

impl Default for SoundState {
    // Autoplay only works muted.
    fn default() -> Self {
        Self { muted: true }
    }
}

impl SoundState {
    /// What `media` is actually doing right now.
    pub fn read<M: MuteFlag + ?Sized>(media: &M) -> Self {
        Self {
            muted: media.is_muted(),
        }
    }

    /// Puts `media` into the default state. The `muted` markup attribute only
    /// sets the default, so the live flag has to be set on mount.
    pub fn sync<M: MuteFlag + ?Sized>(media: &M) -> Self {
        media.set_mute(Self::default().muted);
        Self::read(media)
    }

    /// Flips the live flag of `media` and reports where it ended up.
    pub fn toggle<M: MuteFlag + ?Sized>(media: &M) -> Self {
        media.set_mute(Self::read(media).toggled().muted);
        Self::read(media)
    }

    pub fn toggled(self) -> Self {
        Self { muted: !self.muted }
    }

    pub fn label(&self) -> &'static str {
        if self.muted {
            "Tap To Enable Sound"
        } else {
            "Tap To Disable Sound"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Video element stand-in. `locked` models a player that refuses changes.
    struct FakeVideo {
        muted: Cell<bool>,
        locked: bool,
    }

    impl FakeVideo {
        fn new(muted: bool) -> Self {
            Self { muted: Cell::new(muted), locked: false }
        }
    }

    impl MuteFlag for FakeVideo {
        fn is_muted(&self) -> bool {
            self.muted.get()
        }

        fn set_mute(&self, muted: bool) {
            if !self.locked {
                self.muted.set(muted);
            }
        }
    }

    #[test]
    fn mount_mutes_a_video_created_unmuted() {
        // Created from markup, the live flag starts out false.
        let video = FakeVideo::new(false);
        let state = SoundState::sync(&video);
        assert!(video.is_muted());
        assert_eq!(state.label(), "Tap To Enable Sound");

        let state = SoundState::toggle(&video);
        assert!(!video.is_muted());
        assert_eq!(state.label(), "Tap To Disable Sound");
    }

    #[test]
    fn label_follows_the_element_through_taps() {
        let video = FakeVideo::new(true);
        let first = SoundState::toggle(&video);
        assert_eq!(first, SoundState::read(&video));
        let second = SoundState::toggle(&video);
        assert_eq!(second, SoundState { muted: true });
        assert!(video.is_muted());
    }

    #[test]
    fn label_reports_a_refused_change() {
        let video = FakeVideo { muted: Cell::new(true), locked: true };
        let state = SoundState::toggle(&video);
        assert_eq!(state.label(), "Tap To Enable Sound");
    }

    #[test]
    fn starts_muted() {
        assert!(SoundState::default().muted);
        assert_eq!(SoundState::default().label(), "Tap To Enable Sound");
    }

    #[test]
    fn toggling_twice_restores_mute_flag() {
        for start in [SoundState { muted: true }, SoundState { muted: false }] {
            assert_eq!(start.toggled().toggled(), start);
            assert_ne!(start.toggled(), start);
        }
    }

    #[test]
    fn label_matches_playback() {
        assert_eq!(SoundState { muted: false }.label(), "Tap To Disable Sound");
    }
}
