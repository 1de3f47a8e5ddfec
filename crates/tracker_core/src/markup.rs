use crate::format::escape_html;
use crate::view_model::{AppViewModel, Badge, JobCardView};

/// Renders the job grid as HTML. Every backend-supplied string is escaped.
pub fn render_cards_html(view: &AppViewModel) -> String {
    if view.show_empty_state || view.cards.is_empty() {
        return "<div class=\"empty-state\">No jobs found</div>\n".to_string();
    }

    let mut out = String::from("<div class=\"jobs-grid\">\n");
    for card in &view.cards {
        render_card(&mut out, card);
    }
    out.push_str("</div>\n");
    out
}

fn render_card(out: &mut String, card: &JobCardView) {
    let badge_class = match card.badge {
        Badge::New => "new",
        Badge::Old => "old",
    };
    out.push_str(&format!(
        concat!(
            "  <div class=\"job-card\" data-job-id=\"{id}\">\n",
            "    <span class=\"job-label {badge_class}\">{badge}</span>\n",
            "    <h3 class=\"job-title\">{title}</h3>\n",
            "    <div class=\"job-meta\">\n",
            "      <span class=\"job-company\">{company}</span>\n",
            "      <span class=\"job-location\">{location}</span>\n",
            "      <span class=\"job-source\">{source}</span>\n",
            "    </div>\n",
            "    <div class=\"job-dates\">\n",
            "      <div class=\"job-date\"><strong>Posted:</strong> {posted}</div>\n",
            "      <div class=\"job-date\"><strong>Added:</strong> {added}</div>\n",
            "    </div>\n",
            "    <a class=\"btn-apply\" href=\"{url}\" target=\"_blank\"><strong>Apply Now →</strong></a>\n",
            "  </div>\n",
        ),
        id = card.job_id,
        badge_class = badge_class,
        badge = card.badge.label(),
        title = escape_html(&card.title),
        company = escape_html(&card.company),
        location = escape_html(&card.location),
        source = escape_html(&card.source),
        posted = escape_html(&card.posted),
        added = escape_html(&card.added),
        url = escape_html(&card.url),
    ));
}
