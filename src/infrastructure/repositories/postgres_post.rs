// src/infrastructure/repositories/postgres_post.rs
use super::map_sqlx;
use crate::domain::category::{CategoryId, CategoryName};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    AuthorRef, CategoryRef, Comment, CommentContent, CommentId, CommentView, NewComment, NewPost,
    Page, PageRequest, Post, PostContent, PostDetails, PostFilter, PostId, PostKey,
    PostRepository, PostSlug, PostTitle, PostUpdate, PostView, SearchTerm,
};
use crate::domain::user::{UserId, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const POST_VIEW_COLUMNS: &str = "p.id, p.title, p.slug, p.content, p.excerpt, p.category_id, \
     p.author_id, p.featured_image, p.created_at, p.updated_at, \
     u.username AS author_username, c.name AS category_name";

/// Joins a relation aliased `p` (table or CTE) to its author and category.
fn view_select(source: &str) -> String {
    format!(
        "SELECT {POST_VIEW_COLUMNS} FROM {source} p \
         JOIN users u ON u.id = p.author_id \
         JOIN categories c ON c.id = p.category_id"
    )
}

#[derive(Clone)]
pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostViewRow {
    id: Uuid,
    title: String,
    slug: String,
    content: String,
    excerpt: Option<String>,
    category_id: Uuid,
    author_id: Uuid,
    featured_image: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_username: String,
    category_name: String,
}

impl TryFrom<PostViewRow> for PostView {
    type Error = DomainError;

    fn try_from(row: PostViewRow) -> Result<Self, Self::Error> {
        let author_id = UserId::from(row.author_id);
        let category_id = CategoryId::from(row.category_id);
        Ok(PostView {
            post: Post {
                id: PostId::from(row.id),
                title: PostTitle::new(row.title)?,
                slug: PostSlug::new(row.slug)?,
                content: PostContent::new(row.content)?,
                excerpt: row.excerpt,
                category_id,
                author_id,
                featured_image: row.featured_image,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            author: AuthorRef {
                id: author_id,
                username: Username::new(row.author_username)?,
            },
            category: CategoryRef {
                id: category_id,
                name: CategoryName::new(row.category_name)?,
            },
        })
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: Uuid,
    post_id: Uuid,
    user_id: Uuid,
    content: String,
    created_at: DateTime<Utc>,
    username: String,
}

impl TryFrom<CommentRow> for CommentView {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        let user_id = UserId::from(row.user_id);
        Ok(CommentView {
            comment: Comment {
                id: CommentId::from(row.id),
                post_id: PostId::from(row.post_id),
                user_id,
                content: CommentContent::new(row.content)?,
                created_at: row.created_at,
            },
            user: AuthorRef {
                id: user_id,
                username: Username::new(row.username)?,
            },
        })
    }
}

fn into_views(rows: Vec<PostViewRow>) -> DomainResult<Vec<PostView>> {
    rows.into_iter().map(PostView::try_from).collect()
}

impl PostgresPostRepository {
    fn apply_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: PostFilter) {
        if let Some(category) = filter.category {
            builder.push(" WHERE p.category_id = ");
            builder.push_bind(Uuid::from(category));
        }
    }

    async fn count(&self, filter: PostFilter) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(1) FROM posts p");
        Self::apply_filter(&mut builder, filter);

        builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map(|count| count.max(0) as u64)
            .map_err(map_sqlx)
    }

    async fn fetch_view(&self, key: &PostKey) -> DomainResult<Option<PostView>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(view_select("posts"));
        match key {
            PostKey::ById(id) => {
                builder.push(" WHERE p.id = ");
                builder.push_bind(Uuid::from(*id));
            }
            PostKey::BySlug(slug) => {
                builder.push(" WHERE p.slug = ");
                builder.push_bind(slug.as_str().to_owned());
            }
        }

        let row = builder
            .build_query_as::<PostViewRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(PostView::try_from).transpose()
    }

    async fn fetch_comments(&self, post_id: PostId) -> DomainResult<Vec<CommentView>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT c.id, c.post_id, c.user_id, c.content, c.created_at, u.username
             FROM comments c JOIN users u ON u.id = c.user_id
             WHERE c.post_id = $1
             ORDER BY c.seq",
        )
        .bind(Uuid::from(post_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(CommentView::try_from).collect()
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list(&self, filter: PostFilter, page: PageRequest) -> DomainResult<Page<PostView>> {
        let total = self.count(filter).await?;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(view_select("posts"));
        Self::apply_filter(&mut builder, filter);
        builder.push(" ORDER BY p.created_at DESC, p.id DESC LIMIT ");
        builder.push_bind(i64::from(page.limit()));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(page.offset()).unwrap_or(i64::MAX));

        let rows = builder
            .build_query_as::<PostViewRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(Page::new(into_views(rows)?, total, page))
    }

    async fn find(&self, key: &PostKey) -> DomainResult<Option<PostDetails>> {
        let Some(view) = self.fetch_view(key).await? else {
            return Ok(None);
        };
        let comments = self.fetch_comments(view.post.id).await?;
        Ok(Some(PostDetails { view, comments }))
    }

    async fn insert(&self, post: NewPost) -> DomainResult<PostView> {
        let NewPost {
            id,
            title,
            slug,
            content,
            excerpt,
            category_id,
            author_id,
            featured_image,
            created_at,
        } = post;

        let sql = format!(
            "WITH inserted AS (
                INSERT INTO posts (id, title, slug, content, excerpt, category_id, author_id, featured_image, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
                RETURNING *
             ) {}",
            view_select("inserted")
        );

        let row = sqlx::query_as::<_, PostViewRow>(&sql)
            .bind(Uuid::from(id))
            .bind(title.as_str())
            .bind(slug.as_str())
            .bind(content.as_str())
            .bind(excerpt)
            .bind(Uuid::from(category_id))
            .bind(Uuid::from(author_id))
            .bind(featured_image)
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        PostView::try_from(row)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<PostView> {
        let PostUpdate {
            id,
            title,
            slug,
            content,
            excerpt,
            category_id,
            featured_image,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("WITH updated AS (UPDATE posts SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }
        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(content.into_inner());
        }
        if let Some(excerpt) = excerpt {
            builder.push(", excerpt = ");
            builder.push_bind(excerpt);
        }
        if let Some(category_id) = category_id {
            builder.push(", category_id = ");
            builder.push_bind(Uuid::from(category_id));
        }
        if let Some(image) = featured_image {
            builder.push(", featured_image = ");
            builder.push_bind(image);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(Uuid::from(id));
        builder.push(" RETURNING *) ");
        builder.push(view_select("updated"));

        let row = builder
            .build_query_as::<PostViewRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("Post not found"))?;

        PostView::try_from(row)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        // comments go with the post through ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Post not found"));
        }
        Ok(())
    }

    async fn append_comment(&self, comment: NewComment) -> DomainResult<CommentView> {
        let NewComment {
            id,
            post_id,
            user_id,
            content,
            created_at,
        } = comment;

        let row = sqlx::query_as::<_, CommentRow>(
            "WITH touched AS (
                UPDATE posts SET updated_at = $5 WHERE id = $2 RETURNING id
             ), inserted AS (
                INSERT INTO comments (id, post_id, user_id, content, created_at)
                SELECT $1, touched.id, $3, $4, $5 FROM touched
                RETURNING id, post_id, user_id, content, created_at
             )
             SELECT i.id, i.post_id, i.user_id, i.content, i.created_at, u.username
             FROM inserted i JOIN users u ON u.id = i.user_id",
        )
        .bind(Uuid::from(id))
        .bind(Uuid::from(post_id))
        .bind(Uuid::from(user_id))
        .bind(content.as_str())
        .bind(created_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::not_found("Post not found"))?;

        CommentView::try_from(row)
    }

    async fn search(&self, term: &SearchTerm) -> DomainResult<Vec<PostView>> {
        let pattern = term.like_pattern();
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(view_select("posts"));
        builder.push(" WHERE (p.title ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR p.content ILIKE ");
        builder.push_bind(pattern);
        builder.push(") ORDER BY p.created_at DESC, p.id DESC");

        let rows = builder
            .build_query_as::<PostViewRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        into_views(rows)
    }
}
