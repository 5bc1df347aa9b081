pub mod common {
    pub const LOADING: &str = "Loading...";
}

pub mod theme_toggle {
    pub const SWITCH_TO_LIGHT: &str = "Switch to light mode";
    pub const SWITCH_TO_DARK: &str = "Switch to dark mode";
}

pub mod header {
    pub const BRAND_NAME: &str = "Inkpress";
    pub const BRAND_TAGLINE: &str = "Finance & Accounting Excellence";
    pub const CREATE_BLOG: &str = "Create Blog";
    pub const VIEW_BLOGS: &str = "View Blogs";
}

pub mod browse {
    pub const LIST_TITLE: &str = "Latest Articles";
    pub const LIST_SUBTITLE: &str = "Explore our collection";
}

pub mod article_list {
    pub const ERROR_TITLE: &str = "Failed to load blogs";
    pub const EMPTY_TITLE: &str = "No blogs found";
    pub const EMPTY_BODY: &str = "No blogs available";
}

pub mod article_detail {
    pub const PLACEHOLDER_TITLE: &str = "Select a blog to read";
    pub const PLACEHOLDER_BODY: &str = "Choose an article from the list to view its full content";
    pub const ERROR_TITLE: &str = "Failed to load blog";
    pub const TAGS_LABEL: &str = "Tags:";
}

pub mod create_form {
    pub const TITLE: &str = "Create New Blog";
    pub const SUBTITLE: &str = "Fill in the details to create a new blog post";
    pub const FIELD_TITLE: &str = "Title *";
    pub const FIELD_TITLE_PLACEHOLDER: &str = "Enter blog title";
    pub const FIELD_CATEGORY: &str = "Categories * (comma-separated)";
    pub const FIELD_CATEGORY_PLACEHOLDER: &str = "e.g., FINANCE, TECH";
    pub const FIELD_DESCRIPTION: &str = "Description *";
    pub const FIELD_DESCRIPTION_PLACEHOLDER: &str = "Brief description of your blog";
    pub const FIELD_COVER: &str = "Cover Image URL *";
    pub const FIELD_COVER_PLACEHOLDER: &str = "https://example.com/image.jpg";
    pub const FIELD_CONTENT: &str = "Content *";
    pub const FIELD_CONTENT_PLACEHOLDER: &str = "Write your blog content here...";
    pub const SUBMIT: &str = "Create Blog";
    pub const SUBMITTING: &str = "Creating...";
    pub const SUCCESS: &str = "✓ Blog created successfully!";
    pub const FAILURE: &str = "Failed to create blog. Please try again.";
}

pub mod error_banner {
    pub const TITLE: &str = "Something went wrong";
}
