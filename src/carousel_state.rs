//! Carousel state - the explicit context every carousel operation runs in
//!
//! Owns the ring, the starting snapshot, the animation driver and the host
//! capabilities. Hosts feed it input events and frame deltas.

use crate::animation::{
    active_task, start_task, stop_all_tasks, AnimationDriverData, AnimationTask, FrameClock,
};
use crate::error::{CarouselError, CarouselResult};
use crate::geometry::Bounds;
use crate::input::{map_input, InputCommand, InputEvent};
use crate::layout::{apply_snapshot_slot, capture_snapshot, update_carousel, CarouselSnapshot, LayoutParams};
use crate::plane::quad_mapping;
use crate::renderer::{
    build_quad_vertices, display_transform, validate_texture, PlaneTextures, QuadRenderer,
    QuadVertex, TextureLoader,
};
use crate::ring::{compute_backdrop, create_ring, reset_ring, RingData};
use crate::rotation::{advance_rotation, create_rotation, RotationData, RotationTickReport};
use crate::CarouselConfig;
use std::path::Path;

/// Load both plane textures through the host loader
pub fn load_plane_textures<L: TextureLoader + ?Sized>(
    loader: &mut L,
    config: &CarouselConfig,
) -> CarouselResult<PlaneTextures> {
    let frame = loader.load_texture(Path::new(&config.frame_texture))?;
    let face = loader.load_texture(Path::new(&config.face_texture))?;
    Ok(PlaneTextures { frame, face })
}

pub struct CarouselState<R: QuadRenderer, C: FrameClock> {
    pub config: CarouselConfig,
    pub textures: PlaneTextures,
    pub layout: LayoutParams,
    pub ring: RingData,
    pub snapshot: Option<CarouselSnapshot>,
    pub rotation: RotationData,
    pub driver: AnimationDriverData,
    pub carousel_enabled: bool,
    pub renderer: R,
    pub clock: C,
}

impl<R: QuadRenderer, C: FrameClock> CarouselState<R, C> {
    /// Validate, build the ring, lay out the static fan and capture the
    /// starting snapshot.
    pub fn new(
        config: CarouselConfig,
        textures: PlaneTextures,
        renderer: R,
        clock: C,
    ) -> CarouselResult<Self> {
        config.validate()?;
        validate_texture(&textures.frame)?;
        validate_texture(&textures.face)?;

        let ring = create_ring(config.plane_count, &textures.frame)?;
        let mut state = Self {
            layout: LayoutParams::from(&config),
            rotation: create_rotation(config.rotation_speed),
            config,
            textures,
            ring,
            snapshot: None,
            driver: AnimationDriverData::default(),
            carousel_enabled: false,
            renderer,
            clock,
        };

        state.set_carousel(true)?;
        state.snapshot = Some(capture_snapshot(&state.ring)?);

        log::info!(
            "[CarouselState::new] carousel ready: {} planes, frame {}x{}",
            state.config.plane_count,
            state.textures.frame.width,
            state.textures.frame.height
        );
        Ok(state)
    }

    /// Enable lays out the static fan; disable returns every plane to its
    /// base rectangle.
    pub fn set_carousel(&mut self, enable: bool) -> CarouselResult<()> {
        self.carousel_enabled = enable;
        if enable {
            update_carousel(
                &mut self.ring,
                &self.layout,
                &self.textures.face,
                self.snapshot.as_ref(),
                self.config.show_labels,
                &mut self.renderer,
            )
        } else {
            let positions = self.snapshot.as_ref().map(crate::layout::snapshot_positions);
            reset_ring(
                &mut self.ring,
                positions.as_deref(),
                self.config.show_labels,
                &mut self.renderer,
            );
            Ok(())
        }
    }

    pub fn toggle_carousel(&mut self) -> CarouselResult<()> {
        self.set_carousel(!self.carousel_enabled)
    }

    pub fn is_carousel_rotating(&self) -> bool {
        self.driver.is_carousel_rotating
    }

    /// Start rotating unless already rotating
    pub fn play_rotate_carousel(&mut self) {
        if !self.driver.is_carousel_rotating {
            start_task(&mut self.driver, AnimationTask::Rotation, &mut self.clock);
        }
    }

    /// Hold the static fan each frame
    pub fn play_fan_preview(&mut self) {
        start_task(&mut self.driver, AnimationTask::FanPreview, &mut self.clock);
    }

    pub fn stop_all_anims(&mut self) {
        stop_all_tasks(&mut self.driver, &mut self.clock);
    }

    /// Apply a host input event
    pub fn handle_input(&mut self, event: InputEvent) -> CarouselResult<()> {
        match map_input(event) {
            InputCommand::ToggleRotation => {
                if self.driver.is_carousel_rotating {
                    self.stop_all_anims();
                } else {
                    self.play_rotate_carousel();
                }
            }
            InputCommand::ForceStatic => {
                self.stop_all_anims();
                self.set_carousel(true)?;
            }
            InputCommand::None => {}
        }
        log::debug!(
            "[CarouselState::handle_input] {:?} -> rotating: {}",
            event,
            self.driver.is_carousel_rotating
        );
        Ok(())
    }

    /// Run the active task for one frame
    pub fn tick(&mut self, delta_time: f32) -> CarouselResult<RotationTickReport> {
        let Some(task) = active_task(&self.driver) else {
            return Ok(RotationTickReport::default());
        };
        let snapshot = self.snapshot.as_ref().ok_or(CarouselError::SnapshotMissing)?;

        match task {
            AnimationTask::Rotation => advance_rotation(
                &mut self.ring,
                snapshot,
                &mut self.rotation,
                delta_time,
                self.config.show_labels,
                &mut self.renderer,
            ),
            AnimationTask::FanPreview => {
                for plane in self.ring.planes.iter_mut() {
                    let slot = plane.carousel_index;
                    apply_snapshot_slot(plane, snapshot, slot, &mut self.renderer)?;
                }
                Ok(RotationTickReport::default())
            }
        }
    }

    /// Backdrop rectangle in carousel space
    pub fn backdrop(&self) -> Option<Bounds> {
        compute_backdrop(&self.ring)
    }

    /// Screen-space vertices for every visible plane, back slot first
    pub fn quad_vertices(&self) -> Vec<[QuadVertex; 4]> {
        let display = display_transform(&self.config.display);
        self.ring
            .ordered
            .iter()
            .filter_map(|&id| self.ring.planes.get(id))
            .filter(|p| p.visible)
            .map(|p| build_quad_vertices(&quad_mapping(p), &display))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::ManualClock;
    use crate::input::Key;
    use crate::renderer::{RecordingRenderer, TextureInfo};

    fn textures() -> PlaneTextures {
        PlaneTextures {
            frame: TextureInfo {
                name: "frame".to_string(),
                width: 300,
                height: 400,
            },
            face: TextureInfo {
                name: "face".to_string(),
                width: 300,
                height: 400,
            },
        }
    }

    fn state() -> CarouselState<RecordingRenderer, ManualClock> {
        CarouselState::new(
            CarouselConfig::default(),
            textures(),
            RecordingRenderer::default(),
            ManualClock::default(),
        )
        .expect("Failed to create carousel state")
    }

    #[test]
    fn test_new_captures_snapshot() {
        let state = state();
        assert!(state.carousel_enabled);
        let snapshot = state.snapshot.as_ref().expect("snapshot");
        assert_eq!(snapshot.slots.len(), 10);
        assert!(!state.is_carousel_rotating());
        assert_eq!(state.renderer.labels[&3], "id: 3\ncId: 3");
    }

    #[test]
    fn test_zero_sized_texture_rejected() {
        let mut bad = textures();
        bad.face.height = 0;
        let result = CarouselState::new(
            CarouselConfig::default(),
            bad,
            RecordingRenderer::default(),
            ManualClock::default(),
        );
        assert!(matches!(result, Err(CarouselError::TextureNotReady { .. })));
    }

    #[test]
    fn test_toggle_rotation_on_then_off() {
        let mut state = state();

        state.handle_input(InputEvent::PointerDown).expect("input");
        assert!(state.is_carousel_rotating());
        assert_eq!(state.clock.registered.len(), 1);

        for _ in 0..50 {
            state.tick(1.0).expect("tick");
        }

        state
            .handle_input(InputEvent::KeyUp { key: Key::Space, ctrl: false })
            .expect("input");
        assert!(!state.is_carousel_rotating());
        assert!(state.clock.registered.is_empty());

        state.set_carousel(true).expect("enable");
        assert!(state.ring.planes.iter().all(|p| p.carousel_index == p.id));
        assert_eq!(state.ring.ordered, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_force_static_resets_layout() {
        let mut state = state();
        let rest = state.ring.planes.clone();

        state.play_rotate_carousel();
        for _ in 0..80 {
            state.tick(1.0).expect("tick");
        }
        assert!(state.rotation.relinks > 0);

        state
            .handle_input(InputEvent::KeyUp { key: Key::Space, ctrl: true })
            .expect("input");
        assert!(!state.is_carousel_rotating());
        for (now, then) in state.ring.planes.iter().zip(rest.iter()) {
            assert_eq!(now.carousel_index, then.carousel_index);
            assert_eq!(now.left_neighbour, then.left_neighbour);
            assert!(crate::geometry::corners_abs_diff_eq(
                &now.delta_vector_coords,
                &then.delta_vector_coords,
                1e-3
            ));
        }
    }

    #[test]
    fn test_toggle_carousel_flattens() {
        let mut state = state();
        state.toggle_carousel().expect("toggle");
        assert!(!state.carousel_enabled);
        assert!(state
            .ring
            .planes
            .iter()
            .all(|p| p.delta_vector_coords == [glam::Vec2::ZERO; 4]));
        state.toggle_carousel().expect("toggle");
        assert!(state.carousel_enabled);
    }

    #[test]
    fn test_idle_tick_does_nothing() {
        let mut state = state();
        let calls = state.renderer.map_calls;
        let report = state.tick(1.0).expect("tick");
        assert!(report.relinked.is_empty());
        assert_eq!(state.renderer.map_calls, calls);
    }

    #[test]
    fn test_fan_preview_is_exclusive() {
        let mut state = state();
        state.play_rotate_carousel();
        state.play_fan_preview();
        assert!(!state.is_carousel_rotating());
        assert_eq!(state.clock.registered.len(), 1);
        state.tick(1.0).expect("tick");
    }

    #[test]
    fn test_quad_vertices_skip_hidden_planes() {
        let state = state();
        assert_eq!(state.quad_vertices().len(), 9);
        assert!(state.backdrop().is_some());
    }
}
