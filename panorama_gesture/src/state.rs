// Copyright 2025 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Where the controller is in a gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GestureState {
    /// No pointer down and no fling in progress.
    #[default]
    Untouched,
    /// A pointer is down; moves drag the viewport.
    InTouch,
    /// A fling has been armed but the animation thread has not picked it up yet.
    StartFling,
    /// The animation thread is advancing a fling.
    InFling,
}

impl GestureState {
    /// Returns `true` for [`GestureState::StartFling`] and [`GestureState::InFling`].
    #[must_use]
    pub fn is_flinging(self) -> bool {
        matches!(self, Self::StartFling | Self::InFling)
    }
}

#[cfg(test)]
mod tests {
    use super::GestureState;

    #[test]
    fn only_fling_states_are_flinging() {
        assert!(!GestureState::Untouched.is_flinging());
        assert!(!GestureState::InTouch.is_flinging());
        assert!(GestureState::StartFling.is_flinging());
        assert!(GestureState::InFling.is_flinging());
    }
}
