//! 路径参数提取器
//!
//! 将路径中的 ID 解析为 i64，解析失败时直接返回统一格式的 400 响应，
//! 避免在每个处理函数里重复校验。

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

macro_rules! safe_id_extractor {
    ($(
        $name:ident($param:literal, $label:literal)
    ),* $(,)?) => {
        $(
            #[derive(Debug, Clone, Copy)]
            pub struct $name(pub i64);

            impl FromRequest for $name {
                type Error = actix_web::Error;
                type Future = Ready<Result<Self, Self::Error>>;

                fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                    let parsed = req
                        .match_info()
                        .get($param)
                        .and_then(|raw| raw.parse::<i64>().ok())
                        .filter(|id| *id > 0);

                    ready(match parsed {
                        Some(id) => Ok($name(id)),
                        None => Err(actix_web::error::InternalError::from_response(
                            concat!("invalid ", $label),
                            HttpResponse::BadRequest().json(ApiResponse::error_empty(
                                ErrorCode::BadRequest,
                                concat!("Invalid ", $label, " in path"),
                            )),
                        )
                        .into()),
                    })
                }
            }
        )*
    };
}

safe_id_extractor! {
    SafeClassIdI64("class_id", "class id"),
    SafeStudentIdI64("student_id", "student id"),
    SafeSubjectIdI64("subject_id", "subject id"),
    SafeAssessmentIdI64("assessment_id", "assessment id"),
    SafeMarkIdI64("mark_id", "mark id"),
}
