pub mod article_header;
pub mod article_list;
pub mod article_list_item;
pub mod article_view;
pub mod code_block;
pub mod document_content;
pub mod empty_document;
pub mod error_screen;
pub mod heading;
pub mod paragraph;
pub mod table_of_contents;
pub mod toast;
pub mod welcome;

pub use article_header::ArticleHeader;
pub use article_list::ArticleList;
pub use article_list_item::ArticleListItem;
pub use article_view::ArticleView;
pub use code_block::CodeBlock;
pub use document_content::DocumentContent;
pub use empty_document::EmptyDocument;
pub use error_screen::ErrorScreen;
pub use heading::Heading;
pub use paragraph::Paragraph;
pub use table_of_contents::TableOfContents;
pub use toast::ToastNotice;
pub use welcome::Welcome;
