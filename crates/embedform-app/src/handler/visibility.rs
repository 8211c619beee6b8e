//! Surface transition handlers
//!
//! The transition rules are asymmetric on purpose: `handle_initialize`
//! carves out shoutbox mode from the callout `skip` flag while
//! `handle_open_popup` does not. Both behaviors match the deployed embed
//! script and are pinned by tests.

use tracing::debug;

use crate::state::WidgetState;
use embedform_core::LoadType;

use super::{UpdateAction, UpdateResult};

/// Decide which surface renders initially
///
/// Called exactly once, after the config snapshot is available.
pub fn handle_initialize(state: &mut WidgetState) -> UpdateResult {
    let load_type = state.config().load_type();

    // A host-page popup handler owns the opening; stay hidden until it fires
    if load_type == LoadType::Popup && state.config().has_popup_handlers {
        debug!("popup handler registered, suppressing auto-open");
        return UpdateResult::none();
    }

    state.is_popup_visible = true;

    let Some(callout) = state.config().callout() else {
        // No callout configured: the form is always shown directly
        state.is_form_visible = true;
        return UpdateResult::none();
    };

    // Shoutbox mode teases with the callout once even when skip is set,
    // so the compact widget never opens straight onto a full form
    if callout.skip && load_type != LoadType::Shoutbox {
        state.is_form_visible = true;
        return UpdateResult::none();
    }

    state.is_callout_visible = true;
    UpdateResult::none()
}

/// The visitor accepted the callout teaser
///
/// Purely state-driven; no config is consulted.
pub fn handle_confirm_callout(state: &mut WidgetState) -> UpdateResult {
    state.is_callout_visible = false;
    state.is_form_visible = true;
    UpdateResult::none()
}

/// The circular shoutbox control was toggled
///
/// `visible` reports whether the shoutbox is currently open; the form
/// flips to its negation. A falsy/absent flag also counts one view.
pub fn handle_toggle_shoutbox(state: &mut WidgetState, visible: Option<bool>) -> UpdateResult {
    let was_visible = visible.unwrap_or(false);

    state.is_callout_visible = false;
    state.is_form_visible = !was_visible;

    if !was_visible {
        return UpdateResult::action(UpdateAction::IncrementViewCount {
            form_id: state.form().id.clone(),
        });
    }

    UpdateResult::none()
}

/// A host-page trigger (or re-entry after close) opened the popup
///
/// Unlike `handle_initialize` there is no shoutbox carve-out here: a
/// `skip` callout always yields the form directly.
pub fn handle_open_popup(state: &mut WidgetState) -> UpdateResult {
    state.is_popup_visible = true;

    let Some(callout) = state.config().callout() else {
        state.is_form_visible = true;
        return UpdateResult::none();
    };

    if callout.skip {
        state.is_form_visible = true;
        return UpdateResult::none();
    }

    state.is_callout_visible = true;
    UpdateResult::none()
}

/// Collapse the popup shell and every surface
///
/// Every close counts as one view, regardless of what was visible.
pub fn handle_close_popup(state: &mut WidgetState) -> UpdateResult {
    state.hide_all();

    UpdateResult::action(UpdateAction::IncrementViewCount {
        form_id: state.form().id.clone(),
    })
}
