//! CRUD producers for the portfolio collections.
//!
//! Each function is a zero-argument-friendly async producer suitable for
//! [`crate::state::fetch::use_fetch`]: it resolves to a typed payload or
//! fails with a user-facing message (extraction happens in [`super::api`]).
//! Server-side stubs fail inert; the fetch hook never invokes producers
//! during SSR anyway.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use super::types::{
    BlogPage, BlogPost, BlogPostInput, ContactMessage, GalleryPost, GalleryPostInput, NewMessage,
    Project, ProjectInput,
};
#[cfg(feature = "hydrate")]
use super::types::UploadResult;

#[cfg(not(feature = "hydrate"))]
fn server_stub<T>() -> Result<T, String> {
    Err("not available on server".to_owned())
}

#[cfg(any(test, feature = "hydrate"))]
fn blog_page_endpoint(page: usize, limit: usize) -> String {
    format!("/api/blog?page={page}&limit={limit}")
}

#[cfg(any(test, feature = "hydrate"))]
fn blog_post_endpoint(slug: &str) -> String {
    format!("/api/blog/{slug}")
}

#[cfg(any(test, feature = "hydrate"))]
fn gallery_image_endpoint(id: &str, index: usize) -> String {
    format!("/api/gallery/{id}/images/{index}")
}

// =============================================================
// Projects
// =============================================================

/// Fetch all projects.
pub async fn fetch_projects() -> Result<Vec<Project>, String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::get_json("/api/projects").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        server_stub()
    }
}

/// Create a project.
pub async fn create_project(input: &ProjectInput) -> Result<Project, String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::post_json("/api/projects", input).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        server_stub()
    }
}

/// Update a project by id.
pub async fn update_project(id: &str, input: &ProjectInput) -> Result<Project, String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::put_json(&format!("/api/projects/{id}"), input).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, input);
        server_stub()
    }
}

/// Delete a project by id.
pub async fn delete_project(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::delete(&format!("/api/projects/{id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        server_stub()
    }
}

// =============================================================
// Blog
// =============================================================

/// Fetch one page of blog posts.
pub async fn fetch_blog_page(page: usize, limit: usize) -> Result<BlogPage, String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::get_json(&blog_page_endpoint(page, limit)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page, limit);
        server_stub()
    }
}

/// Fetch a single blog post by slug.
pub async fn fetch_blog_post(slug: &str) -> Result<BlogPost, String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::get_json(&blog_post_endpoint(slug)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = slug;
        server_stub()
    }
}

/// Create a blog post.
pub async fn create_blog_post(input: &BlogPostInput) -> Result<BlogPost, String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::post_json("/api/blog", input).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        server_stub()
    }
}

/// Update a blog post by id.
pub async fn update_blog_post(id: &str, input: &BlogPostInput) -> Result<BlogPost, String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::put_json(&format!("/api/blog/{id}"), input).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, input);
        server_stub()
    }
}

/// Delete a blog post by id.
pub async fn delete_blog_post(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::delete(&format!("/api/blog/{id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        server_stub()
    }
}

// =============================================================
// Gallery
// =============================================================

/// Fetch all gallery posts.
pub async fn fetch_gallery() -> Result<Vec<GalleryPost>, String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::get_json("/api/gallery").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        server_stub()
    }
}

/// Create a gallery post.
pub async fn create_gallery_post(input: &GalleryPostInput) -> Result<GalleryPost, String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::post_json("/api/gallery", input).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        server_stub()
    }
}

/// Update a gallery post by id.
pub async fn update_gallery_post(id: &str, input: &GalleryPostInput) -> Result<GalleryPost, String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::put_json(&format!("/api/gallery/{id}"), input).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, input);
        server_stub()
    }
}

/// Delete a gallery post by id.
pub async fn delete_gallery_post(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::delete(&format!("/api/gallery/{id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        server_stub()
    }
}

/// Remove one image (by index) from an existing gallery post.
///
/// Callers mirror the removal in their local image list on success; the
/// endpoint's response body is not needed.
pub async fn remove_gallery_image(id: &str, index: usize) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::delete(&gallery_image_endpoint(id, index)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, index);
        server_stub()
    }
}

// =============================================================
// Contact messages
// =============================================================

/// Fetch all contact messages (admin only).
pub async fn fetch_messages() -> Result<Vec<ContactMessage>, String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::get_json("/api/messages").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        server_stub()
    }
}

/// Submit a message from the public contact form.
pub async fn send_message(input: &NewMessage) -> Result<ContactMessage, String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::post_json("/api/messages", input).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        server_stub()
    }
}

/// Mark a message as read.
pub async fn mark_message_read(id: &str) -> Result<ContactMessage, String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::put_json(&format!("/api/messages/{id}/read"), &serde_json::json!({})).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        server_stub()
    }
}

/// Delete a message by id.
pub async fn delete_message(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        super::api::delete(&format!("/api/messages/{id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        server_stub()
    }
}

// =============================================================
// Upload
// =============================================================

/// Upload one image file, returning its hosted URL.
///
/// # Errors
///
/// Returns a user-facing message when building the form or the request fails.
#[cfg(feature = "hydrate")]
pub async fn upload_image(file: &web_sys::File) -> Result<UploadResult, String> {
    let form = web_sys::FormData::new().map_err(|_| "could not build upload form".to_owned())?;
    form.append_with_blob("image", file)
        .map_err(|_| "could not attach file".to_owned())?;

    let mut req = gloo_net::http::Request::post("/api/upload");
    if let Some(token) = crate::util::storage::get_string(crate::state::auth::TOKEN_KEY) {
        req = req.header("Authorization", &format!("Bearer {token}"));
    }
    let resp = req
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(super::api::error_message(resp.status(), &body));
    }
    resp.json::<UploadResult>().await.map_err(|e| e.to_string())
}
