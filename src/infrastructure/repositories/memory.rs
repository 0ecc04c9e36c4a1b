// src/infrastructure/repositories/memory.rs
//! Process-local repositories sharing one state so joins resolve like the
//! relational store. Every operation takes the lock once, which keeps each
//! call atomic with respect to concurrent callers.
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::category::{Category, CategoryId, CategoryRepository, NewCategory};
use crate::domain::errors::{DomainError, DomainResult, UniqueField};
use crate::domain::post::{
    AuthorRef, CategoryRef, Comment, CommentView, NewComment, NewPost, Page, PageRequest, Post,
    PostDetails, PostFilter, PostId, PostKey, PostRepository, PostUpdate, PostView, SearchTerm,
};
use crate::domain::user::{Email, NewUser, User, UserId, UserRepository};

#[derive(Default)]
struct MemoryState {
    users: Vec<User>,
    categories: Vec<Category>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
}

impl MemoryState {
    fn author(&self, id: UserId) -> DomainResult<AuthorRef> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .map(|u| AuthorRef {
                id: u.id,
                username: u.username.clone(),
            })
            .ok_or_else(|| DomainError::not_found("User not found"))
    }

    fn category_ref(&self, id: CategoryId) -> DomainResult<CategoryRef> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| CategoryRef {
                id: c.id,
                name: c.name.clone(),
            })
            .ok_or_else(|| DomainError::validation("Category not found"))
    }

    fn view(&self, post: &Post) -> DomainResult<PostView> {
        Ok(PostView {
            post: post.clone(),
            author: self.author(post.author_id)?,
            category: self.category_ref(post.category_id)?,
        })
    }

    fn slug_taken(&self, slug: &str, except: Option<PostId>) -> bool {
        self.posts
            .iter()
            .any(|p| p.slug.as_str() == slug && Some(p.id) != except)
    }

    /// Newest first; among equal timestamps the later insert wins.
    fn newest_first<'a>(&'a self, keep: impl Fn(&Post) -> bool) -> Vec<&'a Post> {
        let mut posts: Vec<&Post> = self.posts.iter().rev().filter(|p| keep(*p)).collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts
    }

    fn find_post(&self, key: &PostKey) -> Option<&Post> {
        self.posts.iter().find(|p| match key {
            PostKey::ById(id) => p.id == *id,
            PostKey::BySlug(slug) => p.slug == *slug,
        })
    }
}

/// Owns the shared state and hands out repositories over it.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn posts(&self) -> InMemoryPostRepository {
        InMemoryPostRepository {
            state: Arc::clone(&self.state),
        }
    }

    pub fn categories(&self) -> InMemoryCategoryRepository {
        InMemoryCategoryRepository {
            state: Arc::clone(&self.state),
        }
    }

    pub fn users(&self) -> InMemoryUserRepository {
        InMemoryUserRepository {
            state: Arc::clone(&self.state),
        }
    }
}

#[derive(Clone)]
pub struct InMemoryPostRepository {
    state: Arc<RwLock<MemoryState>>,
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self, filter: PostFilter, page: PageRequest) -> DomainResult<Page<PostView>> {
        let state = self.state.read().await;
        let matching =
            state.newest_first(|p| filter.category.is_none_or(|c| p.category_id == c));
        let total = matching.len() as u64;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);

        let items = matching
            .into_iter()
            .skip(offset)
            .take(page.limit() as usize)
            .map(|p| state.view(p))
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Page::new(items, total, page))
    }

    async fn find(&self, key: &PostKey) -> DomainResult<Option<PostDetails>> {
        let state = self.state.read().await;
        let Some(post) = state.find_post(key) else {
            return Ok(None);
        };

        let comments = state
            .comments
            .iter()
            .filter(|c| c.post_id == post.id)
            .map(|c| {
                Ok(CommentView {
                    comment: c.clone(),
                    user: state.author(c.user_id)?,
                })
            })
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Some(PostDetails {
            view: state.view(post)?,
            comments,
        }))
    }

    async fn insert(&self, new: NewPost) -> DomainResult<PostView> {
        let mut state = self.state.write().await;
        if state.slug_taken(new.slug.as_str(), None) {
            return Err(DomainError::Conflict(UniqueField::PostSlug));
        }

        let post = Post {
            id: new.id,
            title: new.title,
            slug: new.slug,
            content: new.content,
            excerpt: new.excerpt,
            category_id: new.category_id,
            author_id: new.author_id,
            featured_image: new.featured_image,
            created_at: new.created_at,
            updated_at: new.created_at,
        };
        let view = state.view(&post)?;
        state.posts.push(post);
        Ok(view)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<PostView> {
        let mut state = self.state.write().await;
        let Some(index) = state.posts.iter().position(|p| p.id == update.id) else {
            return Err(DomainError::not_found("Post not found"));
        };

        let slug_clash = update
            .slug
            .as_ref()
            .is_some_and(|slug| state.slug_taken(slug.as_str(), Some(update.id)));
        if slug_clash {
            return Err(DomainError::Conflict(UniqueField::PostSlug));
        }

        let mut post = state.posts[index].clone();
        post.apply(&update);
        let view = state.view(&post)?;
        state.posts[index] = post;
        Ok(view)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut state = self.state.write().await;
        let before = state.posts.len();
        state.posts.retain(|p| p.id != id);
        if state.posts.len() == before {
            return Err(DomainError::not_found("Post not found"));
        }
        state.comments.retain(|c| c.post_id != id);
        Ok(())
    }

    async fn append_comment(&self, new: NewComment) -> DomainResult<CommentView> {
        let mut state = self.state.write().await;
        let user = state.author(new.user_id)?;
        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == new.post_id)
            .ok_or_else(|| DomainError::not_found("Post not found"))?;
        post.updated_at = new.created_at;

        let comment = Comment {
            id: new.id,
            post_id: new.post_id,
            user_id: new.user_id,
            content: new.content,
            created_at: new.created_at,
        };
        state.comments.push(comment.clone());
        Ok(CommentView { comment, user })
    }

    async fn search(&self, term: &SearchTerm) -> DomainResult<Vec<PostView>> {
        let state = self.state.read().await;
        state
            .newest_first(|p| term.matches(p.title.as_str()) || term.matches(p.content.as_str()))
            .into_iter()
            .map(|p| state.view(p))
            .collect()
    }
}

#[derive(Clone)]
pub struct InMemoryCategoryRepository {
    state: Arc<RwLock<MemoryState>>,
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn insert(&self, new: NewCategory) -> DomainResult<Category> {
        let mut state = self.state.write().await;
        if state.categories.iter().any(|c| c.name == new.name) {
            return Err(DomainError::Conflict(UniqueField::CategoryName));
        }

        let category = Category {
            id: new.id,
            name: new.name,
            slug: new.slug,
            created_at: new.created_at,
            updated_at: new.created_at,
        };
        state.categories.push(category.clone());
        Ok(category)
    }

    async fn update(&self, category: &Category) -> DomainResult<Category> {
        let mut state = self.state.write().await;
        if state
            .categories
            .iter()
            .any(|c| c.id != category.id && c.name == category.name)
        {
            return Err(DomainError::Conflict(UniqueField::CategoryName));
        }

        let stored = state
            .categories
            .iter_mut()
            .find(|c| c.id == category.id)
            .ok_or_else(|| DomainError::not_found("Category not found"))?;
        stored.name = category.name.clone();
        stored.slug = category.slug.clone();
        stored.updated_at = category.updated_at;
        Ok(stored.clone())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let state = self.state.read().await;
        Ok(state.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let state = self.state.read().await;
        let mut categories = state.categories.clone();
        categories.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(categories)
    }
}

#[derive(Clone)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<MemoryState>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, new: NewUser) -> DomainResult<User> {
        let mut state = self.state.write().await;
        if state.users.iter().any(|u| u.username == new.username) {
            return Err(DomainError::Conflict(UniqueField::Username));
        }
        if state.users.iter().any(|u| u.email == new.email) {
            return Err(DomainError::Conflict(UniqueField::Email));
        }

        let user = User {
            id: new.id,
            username: new.username,
            email: new.email,
            password_hash: new.password_hash,
            created_at: new.created_at,
        };
        state.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.iter().find(|u| u.email == *email).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.iter().find(|u| u.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::CategoryName;
    use crate::domain::post::{CommentContent, CommentId, PostContent, PostSlug, PostTitle};
    use crate::domain::user::{PasswordHash, Username};
    use chrono::{Duration, Utc};

    async fn seed(store: &InMemoryStore) -> (UserId, CategoryId) {
        let user = store
            .users()
            .insert(NewUser {
                id: UserId::generate(),
                username: Username::new("writer").unwrap(),
                email: Email::new("writer@example.com").unwrap(),
                password_hash: PasswordHash::new("hash").unwrap(),
                created_at: Utc::now(),
            })
            .await
            .unwrap();
        let category = store
            .categories()
            .insert(NewCategory::new(CategoryName::new("Rust").unwrap(), Utc::now()))
            .await
            .unwrap();
        (user.id, category.id)
    }

    fn new_post(title: &str, author: UserId, category: CategoryId, offset: i64) -> NewPost {
        NewPost {
            id: PostId::generate(),
            title: PostTitle::new(title).unwrap(),
            slug: PostSlug::new(crate::domain::slug::slugify(title)).unwrap(),
            content: PostContent::new(format!("{title} body")).unwrap(),
            excerpt: None,
            category_id: category,
            author_id: author,
            featured_image: None,
            created_at: Utc::now() + Duration::seconds(offset),
        }
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let store = InMemoryStore::new();
        let (user, category) = seed(&store).await;
        let repo = store.posts();
        for i in 0..3 {
            repo.insert(new_post(&format!("Post {i}"), user, category, i))
                .await
                .unwrap();
        }

        let page = repo
            .list(PostFilter::default(), PageRequest::default())
            .await
            .unwrap();
        let titles: Vec<_> = page.items.iter().map(|v| v.post.title.as_str()).collect();
        assert_eq!(titles, ["Post 2", "Post 1", "Post 0"]);
        assert_eq!(page.total, 3);
    }

    #[tokio::test]
    async fn duplicate_slug_is_a_conflict() {
        let store = InMemoryStore::new();
        let (user, category) = seed(&store).await;
        let repo = store.posts();
        repo.insert(new_post("Same", user, category, 0)).await.unwrap();
        let err = repo
            .insert(new_post("Same", user, category, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(UniqueField::PostSlug)));
    }

    #[tokio::test]
    async fn unknown_category_is_rejected() {
        let store = InMemoryStore::new();
        let (user, _) = seed(&store).await;
        let err = store
            .posts()
            .insert(new_post("Orphan", user, CategoryId::generate(), 0))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg == "Category not found"));
    }

    #[tokio::test]
    async fn delete_drops_comments() {
        let store = InMemoryStore::new();
        let (user, category) = seed(&store).await;
        let repo = store.posts();
        let view = repo.insert(new_post("Doomed", user, category, 0)).await.unwrap();
        repo.append_comment(NewComment {
            id: CommentId::generate(),
            post_id: view.post.id,
            user_id: user,
            content: CommentContent::new("first").unwrap(),
            created_at: Utc::now(),
        })
        .await
        .unwrap();

        repo.delete(view.post.id).await.unwrap();

        assert!(repo.find(&PostKey::ById(view.post.id)).await.unwrap().is_none());
        assert!(store.state.read().await.comments.is_empty());
    }
}
