use actix_web::{get, web};
use entity::user::Model as UserModel;

use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserRes;

#[get("")]
async fn me(user: web::ReqData<UserModel>) -> ApiResult<UserRes> {
    Ok(ApiResponse::Ok(user.into_inner().into()))
}
