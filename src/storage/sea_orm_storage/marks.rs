//! 成绩存储操作
//!
//! 成绩的"录入顺序"即主键升序，统计接口依赖这一顺序，勿改。

use super::SeaOrmStorage;
use crate::entity::marks::{ActiveModel, Column, Entity as Marks};
use crate::errors::{Result, ResultSysError};
use crate::models::{
    PaginationInfo,
    marks::{
        entities::Mark,
        requests::{CreateMarkRequest, MarkListQuery, UpdateMarkRequest},
        responses::MarkListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 录入成绩
    pub async fn create_mark_impl(&self, req: CreateMarkRequest) -> Result<Mark> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(req.student_id),
            assessment_id: Set(req.assessment_id),
            score: Set(req.score),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ResultSysError::database_operation(format!("录入成绩失败: {e}")))?;

        Ok(result.into_mark())
    }

    /// 通过 ID 获取成绩
    pub async fn get_mark_by_id_impl(&self, mark_id: i64) -> Result<Option<Mark>> {
        let result = Marks::find_by_id(mark_id)
            .one(&self.db)
            .await
            .map_err(|e| ResultSysError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(result.map(|m| m.into_mark()))
    }

    /// 分页列出成绩
    pub async fn list_marks_with_pagination_impl(
        &self,
        query: MarkListQuery,
    ) -> Result<MarkListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Marks::find();

        // 学生筛选
        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        // 测评筛选
        if let Some(assessment_id) = query.assessment_id {
            select = select.filter(Column::AssessmentId.eq(assessment_id));
        }

        // 排序
        select = select.order_by_asc(Column::Id);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| ResultSysError::database_operation(format!("查询成绩总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| ResultSysError::database_operation(format!("查询成绩页数失败: {e}")))?;

        let marks = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| ResultSysError::database_operation(format!("查询成绩列表失败: {e}")))?;

        Ok(MarkListResponse {
            items: marks.into_iter().map(|m| m.into_mark()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 列出某学生全部成绩（按录入顺序）
    pub async fn list_marks_by_student_impl(&self, student_id: i64) -> Result<Vec<Mark>> {
        let marks = Marks::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ResultSysError::database_operation(format!("查询学生成绩失败: {e}")))?;

        Ok(marks.into_iter().map(|m| m.into_mark()).collect())
    }

    /// 按学生 ID 集合批量获取成绩
    pub async fn list_marks_by_student_ids_impl(&self, student_ids: &[i64]) -> Result<Vec<Mark>> {
        if student_ids.is_empty() {
            return Ok(Vec::new());
        }

        let marks = Marks::find()
            .filter(Column::StudentId.is_in(student_ids.to_vec()))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ResultSysError::database_operation(format!("批量查询成绩失败: {e}")))?;

        Ok(marks.into_iter().map(|m| m.into_mark()).collect())
    }

    /// 按测评 ID 集合批量获取成绩
    pub async fn list_marks_by_assessment_ids_impl(
        &self,
        assessment_ids: &[i64],
    ) -> Result<Vec<Mark>> {
        if assessment_ids.is_empty() {
            return Ok(Vec::new());
        }

        let marks = Marks::find()
            .filter(Column::AssessmentId.is_in(assessment_ids.to_vec()))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ResultSysError::database_operation(format!("批量查询成绩失败: {e}")))?;

        Ok(marks.into_iter().map(|m| m.into_mark()).collect())
    }

    /// 列出全部成绩
    pub async fn list_all_marks_impl(&self) -> Result<Vec<Mark>> {
        let marks = Marks::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ResultSysError::database_operation(format!("查询全部成绩失败: {e}")))?;

        Ok(marks.into_iter().map(|m| m.into_mark()).collect())
    }

    /// 更新成绩
    pub async fn update_mark_impl(
        &self,
        mark_id: i64,
        update: UpdateMarkRequest,
    ) -> Result<Option<Mark>> {
        let Some(existing) = Marks::find_by_id(mark_id)
            .one(&self.db)
            .await
            .map_err(|e| ResultSysError::database_operation(format!("查询成绩失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        if let Some(score) = update.score {
            model.score = Set(score);
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| ResultSysError::database_operation(format!("更新成绩失败: {e}")))?;

        Ok(Some(result.into_mark()))
    }

    /// 删除成绩
    pub async fn delete_mark_impl(&self, mark_id: i64) -> Result<bool> {
        let result = Marks::delete_by_id(mark_id)
            .exec(&self.db)
            .await
            .map_err(|e| ResultSysError::database_operation(format!("删除成绩失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
