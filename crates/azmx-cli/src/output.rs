use azmx_domain::Subscription;
use azmx_matrix::Selection;

/// Render the post-selection summary: which subscriptions were excluded
/// (and why), which will get matrix entries.
pub fn render_selection_summary(selection: &Selection) -> String {
    let mut out = String::new();

    if !selection.excluded.is_empty() {
        out.push_str(&format!("Excluded subscriptions ({}):\n", selection.excluded.len()));
        for e in &selection.excluded {
            out.push_str(&format!(
                "  ✗ {} (ID: {}) - matched exclude pattern: {}\n",
                e.subscription.name, e.subscription.id, e.matched
            ));
        }
    }

    if !selection.included.is_empty() {
        out.push_str(&format!("Subscriptions to process ({}):\n", selection.included.len()));
        for sub in &selection.included {
            out.push_str(&format!("  ✓ {} (ID: {})\n", sub.name, sub.id));
        }
    }

    out.push_str(&format!(
        "{} subscription(s) to process, {} excluded\n",
        selection.included.len(),
        selection.excluded.len()
    ));
    out
}

/// Render a discovered subscription listing as plain text.
pub fn render_subscriptions_text(subscriptions: &[Subscription]) -> String {
    let mut out = String::new();
    for sub in subscriptions {
        let state = if sub.enabled { "enabled" } else { "disabled" };
        out.push_str(&format!("{} (ID: {}) [{}]\n", sub.name, sub.id, state));
    }
    out.push_str(&format!("{} subscription(s)\n", subscriptions.len()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use azmx_matrix::ExcludedSubscription;

    #[test]
    fn summary_lists_excluded_with_pattern() {
        let selection = Selection {
            included: vec![Subscription::new("s1", "Prod", true)],
            excluded: vec![ExcludedSubscription {
                subscription: Subscription::new("s2", "Sandbox", true),
                matched: "Sandbox".into(),
            }],
        };
        let text = render_selection_summary(&selection);
        assert!(text.contains("✓ Prod (ID: s1)"));
        assert!(text.contains("✗ Sandbox (ID: s2) - matched exclude pattern: Sandbox"));
        assert!(text.contains("1 subscription(s) to process, 1 excluded"));
    }

    #[test]
    fn empty_selection_still_prints_totals() {
        let text = render_selection_summary(&Selection::default());
        assert_eq!(text, "0 subscription(s) to process, 0 excluded\n");
    }

    #[test]
    fn subscription_listing_shows_state() {
        let subs = vec![
            Subscription::new("s1", "Prod", true),
            Subscription::new("s2", "Frozen", false),
        ];
        let text = render_subscriptions_text(&subs);
        assert!(text.contains("Prod (ID: s1) [enabled]"));
        assert!(text.contains("Frozen (ID: s2) [disabled]"));
        assert!(text.ends_with("2 subscription(s)\n"));
    }
}
