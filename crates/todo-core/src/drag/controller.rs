//! Drag Controller
//!
//! Uses movement threshold to distinguish click from drag. A real drag arms
//! a one-shot click guard so the click the platform synthesizes for the same
//! gesture cannot also toggle completion.

use log::debug;

use crate::config::DragConfig;
use crate::domain::{DomainError, DomainResult, ItemHandle, Point};
use crate::filter::FilterEngine;
use crate::repository::ItemStore;

use super::placement::placeholder_anchor;
use super::session::{DragPreview, DragSession, DragState};
use super::LayoutProbe;

/// How the platform should treat the pointer gesture after a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Let default behaviour (scrolling, text selection) happen
    Passthrough,
    /// A drag owns the gesture; suppress defaults
    Captured,
}

/// Outcome of pointer-up / pointer-cancel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// No pointer-down was recorded
    NoSession,
    /// Pointer went up before the threshold: an ordinary click
    Tap,
    /// Drag finished and the source moved from one index to the other
    Dropped { from: usize, to: usize },
    /// Drag finished but the source was deleted meanwhile
    Abandoned,
}

#[derive(Debug, Clone, Default)]
pub struct DragController {
    config: DragConfig,
    state: DragState,
    click_guard: bool,
}

impl DragController {
    pub fn new(config: DragConfig) -> Self {
        Self {
            config,
            state: DragState::Idle,
            click_guard: false,
        }
    }

    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Idle → Armed. Ignored while another session is in progress.
    ///
    /// Returns `Ok(true)` when a session was armed.
    pub fn pointer_down(
        &mut self,
        store: &ItemStore,
        probe: &dyn LayoutProbe,
        handle: ItemHandle,
        point: Point,
    ) -> DomainResult<bool> {
        if self.state.session().is_some() {
            return Ok(false);
        }
        if !store.contains(handle) {
            return Err(DomainError::StaleReference(handle));
        }
        self.click_guard = false;

        let rect = probe.measure(handle).unwrap_or_default();
        self.state = DragState::Armed(DragSession {
            source: handle,
            origin: point,
            grab_offset: point - rect.origin(),
            pointer: point,
            placeholder_before: None,
            placeholder_height: rect.height,
        });
        debug!("[DND] armed {} at ({}, {})", handle, point.x, point.y);
        Ok(true)
    }

    /// Track the pointer. Crossing the threshold starts the drag; while
    /// dragging, the placeholder is recomputed on every call.
    pub fn pointer_move(
        &mut self,
        store: &ItemStore,
        filter: &FilterEngine,
        probe: &dyn LayoutProbe,
        point: Point,
    ) -> Gesture {
        let threshold = self.config.threshold_px;
        match &mut self.state {
            DragState::Idle => Gesture::Passthrough,
            DragState::Armed(session) => {
                session.pointer = point;
                if session.origin.distance_to(point) <= threshold {
                    return Gesture::Passthrough;
                }
                let mut session = session.clone();
                session.placeholder_before = store
                    .index_of(session.source)
                    .and_then(|i| store.handle_at(i + 1));
                debug!("[DND] drag started for {}", session.source);
                Self::place(&mut session, store, filter, probe);
                self.state = DragState::Dragging(session);
                Gesture::Captured
            }
            DragState::Dragging(session) => {
                session.pointer = point;
                Self::place(session, store, filter, probe);
                Gesture::Captured
            }
        }
    }

    fn place(session: &mut DragSession, store: &ItemStore, filter: &FilterEngine, probe: &dyn LayoutProbe) {
        let candidates = store
            .iter()
            .filter(|(handle, item)| *handle != session.source && filter.is_visible(item))
            .filter_map(|(handle, _)| probe.measure(handle).map(|rect| (handle, rect)));
        session.placeholder_before = placeholder_anchor(session.pointer.y, candidates);
    }

    /// Pointer-up or pointer-cancel. Both resolve the drag at the current
    /// placeholder position.
    pub fn release(&mut self, store: &mut ItemStore) -> Release {
        match std::mem::take(&mut self.state) {
            DragState::Idle => Release::NoSession,
            DragState::Armed(_) => Release::Tap,
            DragState::Dragging(session) => {
                self.click_guard = true;
                match store.move_before(session.source, session.placeholder_before) {
                    Ok((from, to)) => {
                        debug!("[DND] dropped {}: {} -> {}", session.source, from, to);
                        Release::Dropped { from, to }
                    }
                    Err(_) => {
                        debug!("[DND] source {} vanished during drag", session.source);
                        Release::Abandoned
                    }
                }
            }
        }
    }

    /// Consume the click guard. `true` means the click belongs to a drag
    /// that just ended and must be ignored.
    pub fn take_click_guard(&mut self) -> bool {
        std::mem::take(&mut self.click_guard)
    }

    /// Expire the click guard without a click having arrived
    pub fn release_click_guard(&mut self) {
        self.click_guard = false;
    }

    /// Current placeholder/proxy state, `None` unless dragging
    pub fn preview(&self, store: &ItemStore) -> Option<DragPreview> {
        let DragState::Dragging(session) = &self.state else {
            return None;
        };
        let rest = store.handles().into_iter().filter(|h| *h != session.source);
        let placeholder_index = match session.placeholder_before {
            Some(anchor) => rest.take_while(|h| *h != anchor).count(),
            None => rest.count(),
        };
        Some(DragPreview {
            source: session.source,
            placeholder_before: session.placeholder_before,
            placeholder_index,
            placeholder_height: session.placeholder_height,
            proxy: session.proxy_position(),
        })
    }
}
