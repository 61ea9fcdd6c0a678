//! Plain-text rendering of the view DTOs.

use crate::presentation::dto::{
    approval_dto::PendingApprovalResponse,
    content_dto::{ContentDetailResponse, FeedResponse},
    dashboard_dto::DashboardResponse,
    draft_dto::DraftRowResponse,
};
use chrono::{DateTime, NaiveDate};
use std::fmt::Write;

pub const APP_TITLE: &str = "RB Bank Content Publisher";

/// `YYYY-MM-DD` for any ISO datetime or date; the raw text otherwise.
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return "-".to_string();
    };
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.date_naive().format("%Y-%m-%d").to_string();
    }
    match raw.get(..10).map(|head| NaiveDate::parse_from_str(head, "%Y-%m-%d")) {
        Some(Ok(date)) => date.format("%Y-%m-%d").to_string(),
        _ => raw.to_string(),
    }
}

/// Data URLs are summarized; external URLs are shown as is.
pub fn cover_summary(cover: Option<&str>) -> String {
    let Some(cover) = cover.filter(|c| !c.is_empty()) else {
        return "-".to_string();
    };
    match cover.strip_prefix("data:") {
        Some(rest) => {
            let (meta, payload) = rest.split_once(',').unwrap_or((rest, ""));
            let mime = meta.split(';').next().filter(|m| !m.is_empty()).unwrap_or("unknown");
            format!("data:{mime} ({} bytes)", payload.len())
        }
        None => cover.to_string(),
    }
}

fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let line = |cells: Vec<&str>| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect();
        padded.join("  ").trim_end().to_string()
    };
    out.push_str(&line(headers.to_vec()));
    out.push('\n');
    for row in rows {
        out.push_str(&line(row.iter().map(String::as_str).collect()));
        out.push('\n');
    }
    out
}

pub fn render_drafts(rows: &[DraftRowResponse]) -> String {
    if rows.is_empty() {
        return "No drafts created yet.\n".to_string();
    }
    let reconciled = rows.iter().any(|row| row.server_status.is_some());
    let mut headers = vec!["ID", "Title", "Region", "Language", "Status"];
    if reconciled {
        headers.push("Server");
    }
    headers.extend(["Created", "Cover"]);

    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            let mut cells = vec![
                row.id.to_string(),
                row.title.clone(),
                row.region.clone(),
                row.language.to_uppercase(),
                row.status.clone(),
            ];
            if reconciled {
                cells.push(row.server_status.clone().unwrap_or_else(|| "?".to_string()));
            }
            cells.push(format_date(Some(row.created_at.as_str())));
            cells.push(cover_summary(row.cover_image.as_deref()));
            cells
        })
        .collect();
    table(&headers, &body)
}

pub fn render_pending(rows: &[PendingApprovalResponse]) -> String {
    if rows.is_empty() {
        return "No pending approvals.\n".to_string();
    }
    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            vec![
                row.id.to_string(),
                row.title.clone(),
                row.region.clone(),
                row.language.to_uppercase(),
                format_date(Some(row.created_at.as_str())),
            ]
        })
        .collect();
    table(&["ID", "Title", "Region", "Language", "Created"], &body)
}

pub fn render_feed(feed: &FeedResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Published items: {}  Region: {}  Language: {}",
        feed.total,
        feed.region,
        feed.lang.to_uppercase()
    );
    out.push('\n');
    if feed.items.is_empty() {
        out.push_str("No published content found for this region and language.\n");
        return out;
    }
    let body: Vec<Vec<String>> = feed
        .items
        .iter()
        .map(|card| {
            vec![
                card.id.to_string(),
                card.title.clone(),
                card.category.clone(),
                card.region.clone(),
                card.display_language.to_uppercase(),
                format_date(card.published_at.as_deref()),
                cover_summary(card.cover_image.as_deref()),
            ]
        })
        .collect();
    out.push_str(&table(
        &["ID", "Title", "Category", "Region", "Language", "Published", "Cover"],
        &body,
    ));
    out
}

pub fn render_content(detail: &ContentDetailResponse) -> String {
    let mut out = String::new();
    let languages: Vec<String> = detail
        .available_languages
        .iter()
        .map(|lang| lang.to_uppercase())
        .collect();
    let _ = writeln!(out, "{} (ID {})", detail.title, detail.id);
    let _ = writeln!(out, "Status:     {}", detail.status);
    let _ = writeln!(
        out,
        "Type:       {} / {} / {}",
        detail.content_type, detail.category, detail.priority
    );
    let _ = writeln!(out, "Region:     {}", detail.region);
    let _ = writeln!(
        out,
        "Language:   {} (available: {})",
        detail.selected_language.to_uppercase(),
        languages.join(", ")
    );
    if !detail.tags.is_empty() {
        let _ = writeln!(out, "Tags:       {}", detail.tags.join(", "));
    }
    let _ = writeln!(out, "Published:  {}", format_date(detail.published_at.as_deref()));
    if let Some(author) = &detail.created_by {
        let _ = writeln!(
            out,
            "Created:    {} by {author}",
            format_date(detail.created_at.as_deref())
        );
    }
    if let Some(approver) = &detail.approved_by {
        let _ = writeln!(
            out,
            "Approved:   {} by {approver}",
            format_date(detail.approved_at.as_deref())
        );
    }
    if detail.internal {
        let _ = writeln!(out, "Internal:   yes");
    }
    let _ = writeln!(out, "Cover:      {}", cover_summary(detail.cover_image.as_deref()));
    out.push('\n');
    out.push_str(&detail.body_html);
    out.push('\n');
    out
}

pub fn render_dashboard(dashboard: &DashboardResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{APP_TITLE}");
    let _ = writeln!(out, "Manage your content lifecycle in one unified dashboard.");
    out.push('\n');
    for workspace in &dashboard.workspaces {
        let _ = writeln!(
            out,
            "  {:<20} {}  (content-publisher {})",
            workspace.name, workspace.description, workspace.command
        );
    }
    out.push('\n');
    let _ = writeln!(
        out,
        "Local drafts: {}  Pending approvals: {}",
        dashboard.local_drafts, dashboard.pending_approvals
    );
    out
}
