//! Wire schema shared with the portfolio API.
//!
//! Records come back from a Mongo-backed service, so ids arrive as `_id`
//! and field names are camelCase.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authenticated admin user profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Login request payload.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful login response: the user record plus a bearer token.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(flatten)]
    pub user: User,
}

/// A portfolio project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    pub thumbnail: String,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    pub created_at: String,
}

/// Create/update payload for a project.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub category: String,
    pub tech_stack: Vec<String>,
    pub thumbnail: String,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub featured: bool,
}

/// A blog post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub published: bool,
    pub created_at: String,
}

/// One page of blog posts with pagination counts.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPage {
    pub posts: Vec<BlogPost>,
    #[serde(default)]
    pub total_posts: usize,
    #[serde(default)]
    pub total_pages: usize,
    #[serde(default)]
    pub current_page: usize,
}

/// Create/update payload for a blog post.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostInput {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub cover_image: Option<String>,
    pub tags: Vec<String>,
    pub published: bool,
}

/// A gallery post holding one or more images.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryPost {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub featured: bool,
    pub created_at: String,
}

/// Create/update payload for a gallery post.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryPostInput {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub image_urls: Vec<String>,
    pub order: i32,
    pub featured: bool,
}

/// A message submitted through the public contact form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    pub created_at: String,
}

/// Contact form submission payload.
#[derive(Clone, Debug, Default, Serialize)]
pub struct NewMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Response from the image upload service.
#[derive(Clone, Debug, Deserialize)]
pub struct UploadResult {
    pub url: String,
}
