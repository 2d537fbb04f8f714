//! Home service — every store operation the dashboard exposes.
//!
//! Each mutation loads the snapshot, applies one domain mutation, replaces
//! the snapshot, and returns the full updated state. Unknown room/device/
//! schedule references are silent no-ops (the unchanged state comes back),
//! matching the store's documented policy.

use smartstay_domain::device::{TEMP_MAX, TEMP_MIN};
use smartstay_domain::error::{SmartStayError, ValidationError};
use smartstay_domain::home::HomeState;
use smartstay_domain::scene::{SceneAction, SceneKind, actions_for};
use smartstay_domain::schedule::{Schedule, ScheduleRepeat};

use crate::ports::HomeStateRepository;

/// Application service for the home-state store.
pub struct HomeService<R> {
    repo: R,
}

impl<R: HomeStateRepository> HomeService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    async fn mutate(
        &self,
        apply: impl FnOnce(&mut HomeState) + Send,
    ) -> Result<HomeState, SmartStayError> {
        let mut state = self.repo.load().await?;
        apply(&mut state);
        self.repo.replace(state.clone()).await?;
        Ok(state)
    }

    /// Current state snapshot.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn state(&self) -> Result<HomeState, SmartStayError> {
        self.repo.load().await
    }

    /// Replace the whole state, as uploaded by a client.
    ///
    /// # Errors
    ///
    /// Returns [`SmartStayError::Validation`] when the uploaded state breaks
    /// stored-format invariants, or a storage error from the repository.
    pub async fn save_state(&self, state: HomeState) -> Result<HomeState, SmartStayError> {
        state.validate()?;
        self.repo.replace(state.clone()).await?;
        Ok(state)
    }

    /// Apply a scene and record it as active.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn apply_scene(&self, scene: SceneKind) -> Result<HomeState, SmartStayError> {
        tracing::info!(%scene, "applying scene");
        self.mutate(|state| state.apply_scene(scene)).await
    }

    /// Derive the actions a scene would perform, without applying them.
    /// Backs the confirmation prompt's affected-device count.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn preview_scene(&self, scene: SceneKind) -> Result<Vec<SceneAction>, SmartStayError> {
        let state = self.repo.load().await?;
        Ok(actions_for(scene, &state))
    }

    /// Flip a light or appliance.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn toggle_device(
        &self,
        room: &str,
        device: &str,
    ) -> Result<HomeState, SmartStayError> {
        self.mutate(|state| state.toggle_device(room, device)).await
    }

    /// Set a thermostat target temperature.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TemperatureOutOfRange`] when the requested
    /// temperature is outside [`TEMP_MIN`]..=[`TEMP_MAX`] (the domain clamp
    /// still guards whatever reaches the state), or a storage error.
    pub async fn set_thermostat(
        &self,
        room: &str,
        device: &str,
        temp: f64,
    ) -> Result<HomeState, SmartStayError> {
        if !(TEMP_MIN..=TEMP_MAX).contains(&temp) {
            return Err(ValidationError::TemperatureOutOfRange(temp).into());
        }
        self.mutate(|state| state.set_thermostat(room, device, temp))
            .await
    }

    /// Store a new schedule with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTime`] when `time` is not `HH:MM`,
    /// or a storage error from the repository.
    pub async fn add_schedule(
        &self,
        device_path: &str,
        time: &str,
        repeat: ScheduleRepeat,
    ) -> Result<HomeState, SmartStayError> {
        let schedule = Schedule::new(device_path, time, repeat)?;
        self.mutate(|state| state.add_schedule(schedule)).await
    }

    /// Remove a schedule by id. Unknown ids no-op.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn remove_schedule(&self, id: &str) -> Result<HomeState, SmartStayError> {
        self.mutate(|state| state.remove_schedule(id)).await
    }

    /// Switch off every light and appliance.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn turn_all_off(&self) -> Result<HomeState, SmartStayError> {
        self.mutate(HomeState::turn_all_off).await
    }

    /// Select a room. Unknown rooms no-op.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn set_active_room(&self, room: &str) -> Result<HomeState, SmartStayError> {
        self.mutate(|state| state.set_active_room(room)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::Mutex;

    struct InMemoryHomeRepo {
        state: Mutex<HomeState>,
    }

    impl Default for InMemoryHomeRepo {
        fn default() -> Self {
            Self {
                state: Mutex::new(HomeState::default_layout()),
            }
        }
    }

    impl HomeStateRepository for InMemoryHomeRepo {
        fn load(&self) -> impl Future<Output = Result<HomeState, SmartStayError>> + Send {
            let state = self.state.lock().unwrap().clone();
            async { Ok(state) }
        }

        fn replace(
            &self,
            state: HomeState,
        ) -> impl Future<Output = Result<(), SmartStayError>> + Send {
            *self.state.lock().unwrap() = state;
            async { Ok(()) }
        }
    }

    fn make_service() -> HomeService<InMemoryHomeRepo> {
        HomeService::new(InMemoryHomeRepo::default())
    }

    #[tokio::test]
    async fn should_return_default_layout_initially() {
        let svc = make_service();
        let state = svc.state().await.unwrap();
        assert_eq!(state, HomeState::default_layout());
    }

    #[tokio::test]
    async fn should_persist_toggle_across_calls() {
        let svc = make_service();
        svc.toggle_device("Kitchen", "Toaster").await.unwrap();

        let state = svc.state().await.unwrap();
        assert_eq!(state.device("Kitchen", "Toaster").unwrap().on, Some(true));
    }

    #[tokio::test]
    async fn should_return_unchanged_state_when_toggling_unknown_device() {
        let svc = make_service();
        let before = svc.state().await.unwrap();
        let after = svc.toggle_device("Garage", "Opener").await.unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn should_reject_out_of_range_temperature() {
        let svc = make_service();
        let result = svc.set_thermostat("Living Room", "Thermostat", 31.0).await;
        assert!(matches!(
            result,
            Err(SmartStayError::Validation(
                ValidationError::TemperatureOutOfRange(_)
            ))
        ));

        // No partial mutation.
        let state = svc.state().await.unwrap();
        assert_eq!(
            state.device("Living Room", "Thermostat").unwrap().temp,
            Some(21.0)
        );
    }

    #[tokio::test]
    async fn should_accept_boundary_temperatures() {
        let svc = make_service();
        let state = svc
            .set_thermostat("Living Room", "Thermostat", 16.0)
            .await
            .unwrap();
        assert_eq!(
            state.device("Living Room", "Thermostat").unwrap().temp,
            Some(16.0)
        );

        let state = svc
            .set_thermostat("Living Room", "Thermostat", 30.0)
            .await
            .unwrap();
        assert_eq!(
            state.device("Living Room", "Thermostat").unwrap().temp,
            Some(30.0)
        );
    }

    #[tokio::test]
    async fn should_apply_away_scene_and_record_it() {
        let svc = make_service();
        svc.toggle_device("Bedroom", "Fan").await.unwrap();

        let state = svc.apply_scene(SceneKind::Away).await.unwrap();
        assert_eq!(state.active_scene, SceneKind::Away);
        for room in state.rooms.values() {
            for device in room.devices.values() {
                assert_ne!(device.on, Some(true));
            }
        }
    }

    #[tokio::test]
    async fn should_preview_scene_without_mutating_state() {
        let svc = make_service();
        let before = svc.state().await.unwrap();

        let actions = svc.preview_scene(SceneKind::Night).await.unwrap();
        assert_eq!(actions.len(), 4);

        let after = svc.state().await.unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn should_match_preview_count_with_applied_changes() {
        let svc = make_service();
        let preview = svc.preview_scene(SceneKind::Away).await.unwrap();

        let state = svc.apply_scene(SceneKind::Away).await.unwrap();
        for action in &preview {
            let device = state.device(&action.room, &action.device).unwrap();
            if let Some(on) = action.on {
                assert_eq!(device.on, Some(on));
            }
            if let Some(temp) = action.temp {
                assert_eq!(device.temp, Some(temp));
            }
        }
    }

    #[tokio::test]
    async fn should_add_then_remove_schedule_by_returned_id() {
        let svc = make_service();
        let state = svc
            .add_schedule("Bedroom||Fan", "22:30", ScheduleRepeat::Daily)
            .await
            .unwrap();
        assert_eq!(state.schedules.len(), 1);
        let id = state.schedules[0].id.to_string();

        let state = svc.remove_schedule(&id).await.unwrap();
        assert!(state.schedules.is_empty());
    }

    #[tokio::test]
    async fn should_reject_schedule_with_malformed_time() {
        let svc = make_service();
        let result = svc
            .add_schedule("Bedroom||Fan", "late", ScheduleRepeat::Once)
            .await;
        assert!(matches!(
            result,
            Err(SmartStayError::Validation(ValidationError::InvalidTime(_)))
        ));
        assert!(svc.state().await.unwrap().schedules.is_empty());
    }

    #[tokio::test]
    async fn should_save_uploaded_state_wholesale() {
        let svc = make_service();
        let mut uploaded = HomeState::default_layout();
        uploaded.set_active_room("Kitchen");
        uploaded.toggle_device("Kitchen", "Kitchen Light");

        let saved = svc.save_state(uploaded.clone()).await.unwrap();
        assert_eq!(saved, uploaded);
        assert_eq!(svc.state().await.unwrap(), uploaded);
    }

    #[tokio::test]
    async fn should_reject_uploaded_state_with_invalid_temperature() {
        let svc = make_service();
        let mut uploaded = HomeState::default_layout();
        uploaded
            .rooms
            .get_mut("Living Room")
            .unwrap()
            .devices
            .get_mut("Thermostat")
            .unwrap()
            .temp = Some(55.0);

        let result = svc.save_state(uploaded).await;
        assert!(matches!(result, Err(SmartStayError::Validation(_))));

        // The stored snapshot is untouched.
        assert_eq!(svc.state().await.unwrap(), HomeState::default_layout());
    }

    #[tokio::test]
    async fn should_turn_everything_off() {
        let svc = make_service();
        svc.toggle_device("Kitchen", "Kitchen Light").await.unwrap();
        svc.toggle_device("Living Room", "Coffee Maker").await.unwrap();

        let state = svc.turn_all_off().await.unwrap();
        for room in state.rooms.values() {
            for device in room.devices.values() {
                assert_ne!(device.on, Some(true));
            }
        }
    }

    #[tokio::test]
    async fn should_select_existing_room_and_ignore_unknown() {
        let svc = make_service();
        let state = svc.set_active_room("Bedroom").await.unwrap();
        assert_eq!(state.active_room, "Bedroom");

        let state = svc.set_active_room("Attic").await.unwrap();
        assert_eq!(state.active_room, "Bedroom");
    }
}
