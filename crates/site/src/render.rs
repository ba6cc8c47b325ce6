//! Page rendering.
//!
//! Handlers talk to the HTML layer through [`PageRenderer`] so page markup
//! can change (or be mocked) without touching request handling.

use mockall::automock;

use storefront_app::domain::listing::records::{EnrichedResident, ResidentPage};

/// Base path of the resident list page; pagination links point back here.
pub(crate) const LIST_PATH: &str = "/management/residents/list";

#[automock]
pub(crate) trait PageRenderer: Send + Sync {
    /// Render the resident list page.
    fn residents_page(&self, page: &ResidentPage) -> String;

    /// Render the generic failure page. Internal error details never reach
    /// it; they stay in the server logs.
    fn error_page(&self) -> String;
}

#[derive(Debug, Clone, Default)]
pub(crate) struct HtmlRenderer;

impl PageRenderer for HtmlRenderer {
    fn residents_page(&self, page: &ResidentPage) -> String {
        let rows: String = page.rows.iter().map(render_row).collect();
        let links = pagination_links(page);

        format!(
            "<!DOCTYPE html>\n<html lang=\"vi\">\n<head><meta charset=\"utf-8\">\
             <title>Người liên quan Covid | Xem danh sách</title></head>\n<body>\n\
             <table class=\"resident-list\">\n<thead><tr>\
             <th>Mã</th><th>Họ tên</th><th>CMND/CCCD</th><th>Ngày sinh</th>\
             <th>Trạng thái</th><th>Người quản lý</th><th>Liên quan</th><th>Địa chỉ</th>\
             </tr></thead>\n<tbody>\n{rows}</tbody>\n</table>\n\
             <nav id=\"pagination\">{links}</nav>\n</body>\n</html>\n"
        )
    }

    fn error_page(&self) -> String {
        "<!DOCTYPE html>\n<html lang=\"vi\">\n<head><meta charset=\"utf-8\">\
         <title>Lỗi</title></head>\n<body>\n\
         <p>Đã có lỗi xảy ra, vui lòng thử lại sau.</p>\n</body>\n</html>\n"
            .to_string()
    }
}

fn render_row(row: &EnrichedResident) -> String {
    let resident = &row.resident;

    format!(
        "<tr data-uuid=\"{}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
         <td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
        resident.uuid,
        resident.code,
        escape(&resident.full_name),
        escape(&resident.people_id),
        resident.date_of_birth,
        resident.status.label(),
        escape(resident.manager.as_deref().unwrap_or("")),
        row.num_of_related,
        escape(&row.address),
    )
}

fn pagination_links(page: &ResidentPage) -> String {
    let total_pages = page.total.div_ceil(u64::from(page.page_size.max(1)));

    (1..=total_pages)
        .map(|number| {
            if number == u64::from(page.page) {
                format!("<li class=\"active\"><span>{number}</span></li>")
            } else {
                format!(
                    "<li><a href=\"{}\">{number}</a></li>",
                    page_href(number, &page.sort)
                )
            }
        })
        .collect()
}

fn page_href(page_number: u64, sort: &str) -> String {
    if sort.is_empty() {
        format!("{LIST_PATH}?page={page_number}")
    } else {
        // Sort strings only contain whitelisted field names, spaces, and
        // commas; the space is the one character needing encoding.
        format!(
            "{LIST_PATH}?page={page_number}&sort={}",
            sort.replace(' ', "%20")
        )
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
