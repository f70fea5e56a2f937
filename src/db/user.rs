use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, user::DBUserCreate};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set,
    TransactionTrait,
};
use uuid::Uuid;

impl PostgresService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Registration: email must be free; the caller hands us the finished
    /// password hash, plaintext never reaches this layer.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<UserModel, AppError> {
        if self.user_exists_by_email(&payload.email).await? {
            return Err(AppError::AlreadyExists);
        }
        let txn = self.db.begin().await?;

        let user = UserActive {
            id: Set(Uuid::new_v4()),
            email: Set(payload.email),
            password_hash: Set(payload.password_hash),
            is_active: Set(true),
            is_admin: Set(payload.is_admin),
            created_at: Set(Utc::now()),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(user)
    }

    pub async fn admin_exists(&self) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::IsAdmin.eq(true))
            .count(&self.db)
            .await?
            > 0)
    }

    /// Create the given admin account unless some admin already exists.
    /// Returns whether a row was written.
    pub async fn seed_admin(&self, email: String, password_hash: String) -> Result<bool, AppError> {
        if self.admin_exists().await? {
            return Ok(false);
        }
        self.create_user(DBUserCreate {
            email,
            password_hash,
            is_admin: true,
        })
        .await?;
        Ok(true)
    }

    /// Accounts are never hard-deleted; deactivation is the off switch.
    pub async fn set_user_active(&self, id: &Uuid, active: bool) -> Result<(), AppError> {
        let mut am: UserActive = self.get_user_by_id(id).await?.into();
        am.is_active = Set(active);
        Ok(am.update(&self.db).await.map(|_| ())?)
    }

    pub async fn count_users(&self) -> Result<u64, AppError> {
        Ok(User::find().count(&self.db).await?)
    }
}
