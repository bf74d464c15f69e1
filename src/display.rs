//! Plain-terminal output for the one-shot commands.

use owo_colors::OwoColorize;
use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::detail::PostDetail;
use crate::render::{ListView, PostSummary, page_label};

/// Marker prefixed to long-post titles
pub const LONG_MARKER: &str = "▌";

/// Prefix for each comment in the detail view
pub const COMMENT_PREFIX: &str = "💬";

/// A row in the post list table
#[derive(Tabled)]
struct PostRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Comments")]
    comments: usize,
    #[tabled(rename = "Preview")]
    preview: String,
}

impl From<&PostSummary> for PostRow {
    fn from(summary: &PostSummary) -> Self {
        let title = if summary.is_long {
            format!("{LONG_MARKER} {}", summary.title)
        } else {
            summary.title.clone()
        };
        Self {
            id: summary.id,
            title,
            author: summary.author.clone().unwrap_or_default(),
            comments: summary.comment_count,
            preview: summary.preview.clone(),
        }
    }
}

/// Render the list as a rounded table, or the status message in its place
pub fn format_list_table(view: &ListView) -> String {
    match view {
        ListView::Posts { items, .. } => {
            let rows: Vec<PostRow> = items.iter().map(PostRow::from).collect();
            let mut table = Table::new(rows);
            table.with(Style::rounded());
            table.to_string()
        }
        other => other.message().unwrap_or_default().to_string(),
    }
}

/// Print the list view with its page label
pub fn print_list(view: &ListView) {
    match view {
        ListView::Posts { page, items } => {
            println!("{}", format_list_table(view));
            println!(
                "\n{}  {} post(s)",
                page_label(*page).bold(),
                items.len()
            );
        }
        ListView::Empty { page } => {
            println!("{}", format_list_table(view).dimmed());
            println!("\n{}", page_label(*page).bold());
        }
        // Failures are reported by the caller
        ListView::Failed(_) | ListView::Loading => {}
    }
}

/// JSON form of the list view
pub fn list_json(view: &ListView) -> serde_json::Value {
    match view {
        ListView::Posts { page, items } => json!({
            "page": page,
            "posts": items,
        }),
        ListView::Empty { page } => json!({
            "page": page,
            "posts": [],
            "message": view.message(),
        }),
        ListView::Failed(message) => json!({ "error": message }),
        ListView::Loading => json!({ "loading": true }),
    }
}

/// Plain-text detail: title, body, author, then comments in order
pub fn format_detail(detail: &PostDetail) -> String {
    let mut out = String::new();
    out.push_str(&detail.post.title);
    out.push_str("\n\n");
    out.push_str(&detail.post.body);
    out.push_str("\n\nAuthor: ");
    out.push_str(detail.author_label());
    out.push_str("\n\nComments\n");
    for comment in &detail.comments {
        out.push_str(COMMENT_PREFIX);
        out.push(' ');
        out.push_str(&comment.body);
        out.push('\n');
    }
    out
}

/// Machine-readable detail
pub fn detail_json(detail: &PostDetail) -> serde_json::Value {
    json!({
        "post": detail.post,
        "author": detail.author_label(),
        "comments": detail.comments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use postdeck_model::{Comment, Post};

    fn summary(id: u64, is_long: bool) -> PostSummary {
        PostSummary {
            id,
            title: format!("title {id}"),
            preview: "preview...".to_string(),
            is_long,
            author: Some("Leanne Graham".to_string()),
            comment_count: 5,
            title_indices: vec![],
        }
    }

    fn detail(author: Option<&str>) -> PostDetail {
        PostDetail {
            post: Post {
                id: 1,
                user_id: 1,
                title: "sunt aut facere".to_string(),
                body: "quia et suscipit\nsuscipit recusandae".to_string(),
            },
            author: author.map(str::to_string),
            comments: vec![
                Comment {
                    id: 1,
                    post_id: 1,
                    name: "id labore".to_string(),
                    email: "Eliseo@gardner.biz".to_string(),
                    body: "laudantium enim".to_string(),
                },
                Comment {
                    id: 2,
                    post_id: 1,
                    name: "quo vero".to_string(),
                    email: "Jayne_Kuhic@sydney.com".to_string(),
                    body: "est natus enim".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_format_detail() {
        insta::assert_snapshot!(format_detail(&detail(Some("Leanne Graham"))), @r"
        sunt aut facere

        quia et suscipit
        suscipit recusandae

        Author: Leanne Graham

        Comments
        💬 laudantium enim
        💬 est natus enim
        ");
    }

    #[test]
    fn test_format_detail_unknown_author() {
        let text = format_detail(&detail(None));
        assert!(text.contains("Author: unknown"));
    }

    #[test]
    fn test_table_contains_rows_and_marker() {
        let view = ListView::Posts {
            page: 1,
            items: vec![summary(1, false), summary(2, true)],
        };
        let table = format_list_table(&view);
        assert!(table.contains("ID"));
        assert!(table.contains("title 1"));
        assert!(table.contains(&format!("{LONG_MARKER} title 2")));
        assert!(!table.contains(&format!("{LONG_MARKER} title 1")));
    }

    #[test]
    fn test_empty_view_prints_message() {
        assert_eq!(
            format_list_table(&ListView::Empty { page: 4 }),
            "No posts found"
        );
    }

    #[test]
    fn test_list_json_shapes() {
        let view = ListView::Posts {
            page: 2,
            items: vec![summary(11, false)],
        };
        let value = list_json(&view);
        assert_eq!(value["page"], 2);
        assert_eq!(value["posts"][0]["id"], 11);
        assert_eq!(value["posts"][0]["comment_count"], 5);
        assert!(value["posts"][0].get("title_indices").is_none());

        let value = list_json(&ListView::Empty { page: 3 });
        assert_eq!(value["message"], "No posts found");

        let value = list_json(&ListView::Failed("Failed to load data".into()));
        assert_eq!(value["error"], "Failed to load data");
    }

    #[test]
    fn test_detail_json_uses_author_label() {
        let value = detail_json(&detail(None));
        assert_eq!(value["author"], "unknown");
        assert_eq!(value["post"]["userId"], 1);
        assert_eq!(value["comments"].as_array().map(Vec::len), Some(2));
    }
}
