//! Presenting the selected tab's content
//!
//! Swapping the presented content can pull the focused element out of the
//! visual tree, and focus would then fall back to the window root.
//! A refresh watches the presenter for focus loss during the swap, and when
//! it sees one it puts focus back inside the new content.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tabview_host::{ContentPresenter, FocusState, PresentedContent, Subscription, TabEntry};

use crate::view::TabView;

/// Observes one content swap. Dropping it ends the observation.
struct FocusLossWatch {
    lost: Arc<AtomicBool>,
    _subscription: Subscription,
}

impl FocusLossWatch {
    fn begin(presenter: &dyn ContentPresenter) -> Self {
        let lost = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&lost);
        let subscription = presenter.losing_focus().subscribe(move |_| {
            flag.store(true, Ordering::SeqCst);
        });

        Self {
            lost,
            _subscription: subscription,
        }
    }

    fn observed(&self) -> bool {
        self.lost.load(Ordering::SeqCst)
    }
}

impl<T: TabEntry> TabView<T> {
    pub(crate) fn update_tab_content(&mut self) {
        let Some(presenter) = self.parts.tab_content_presenter.clone() else {
            return;
        };

        let Some(container) = self.selected_container() else {
            presenter.write().set_content(PresentedContent::default());
            return;
        };

        let watch = FocusLossWatch::begin(&*presenter.read());
        {
            let mut presenter = presenter.write();
            presenter.set_content(container.content.clone());
            // Lay out now so the new subtree can be searched for focus
            presenter.update_layout();
        }
        let focus_lost = watch.observed();
        drop(watch);

        if !focus_lost {
            return;
        }

        let live = presenter.read().live_content();
        let target = live
            .and_then(|root| self.tree.read().find_first_focusable(root))
            .unwrap_or(container.id);
        let moved = self.tree.write().set_focus(target, FocusState::Programmatic);

        tracing::info!(
            target = %target,
            fallback_to_tab = target == container.id,
            moved,
            "Restored focus after content swap"
        );
    }
}
