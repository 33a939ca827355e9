//! 测评存储操作

use super::SeaOrmStorage;
use crate::entity::assessments::{ActiveModel, Column, Entity as Assessments};
use crate::errors::{Result, ResultSysError};
use crate::models::{
    PaginationInfo,
    assessments::{
        entities::Assessment,
        requests::{AssessmentListQuery, CreateAssessmentRequest, UpdateAssessmentRequest},
        responses::AssessmentListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建测评
    pub async fn create_assessment_impl(
        &self,
        req: CreateAssessmentRequest,
    ) -> Result<Assessment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            kind: Set(req.kind),
            maximum_marks: Set(req.maximum_marks),
            term: Set(req.term),
            subject_id: Set(req.subject_id),
            date: Set(req.date),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ResultSysError::database_operation(format!("创建测评失败: {e}")))?;

        Ok(result.into_assessment())
    }

    /// 通过 ID 获取测评
    pub async fn get_assessment_by_id_impl(
        &self,
        assessment_id: i64,
    ) -> Result<Option<Assessment>> {
        let result = Assessments::find_by_id(assessment_id)
            .one(&self.db)
            .await
            .map_err(|e| ResultSysError::database_operation(format!("查询测评失败: {e}")))?;

        Ok(result.map(|m| m.into_assessment()))
    }

    /// 分页列出测评
    pub async fn list_assessments_with_pagination_impl(
        &self,
        query: AssessmentListQuery,
    ) -> Result<AssessmentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Assessments::find();

        // 科目筛选
        if let Some(subject_id) = query.subject_id {
            select = select.filter(Column::SubjectId.eq(subject_id));
        }

        // 学期筛选（精确匹配）
        if let Some(ref term) = query.term
            && !term.trim().is_empty()
        {
            select = select.filter(Column::Term.eq(term.trim()));
        }

        // 排序
        select = select.order_by_asc(Column::Id);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| ResultSysError::database_operation(format!("查询测评总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| ResultSysError::database_operation(format!("查询测评页数失败: {e}")))?;

        let assessments = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| ResultSysError::database_operation(format!("查询测评列表失败: {e}")))?;

        Ok(AssessmentListResponse {
            items: assessments
                .into_iter()
                .map(|m| m.into_assessment())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 按 ID 集合批量获取测评
    pub async fn list_assessments_by_ids_impl(&self, ids: &[i64]) -> Result<Vec<Assessment>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let assessments = Assessments::find()
            .filter(Column::Id.is_in(ids.to_vec()))
            .all(&self.db)
            .await
            .map_err(|e| ResultSysError::database_operation(format!("批量查询测评失败: {e}")))?;

        Ok(assessments
            .into_iter()
            .map(|m| m.into_assessment())
            .collect())
    }

    /// 按科目 ID 集合批量获取测评
    pub async fn list_assessments_by_subject_ids_impl(
        &self,
        subject_ids: &[i64],
    ) -> Result<Vec<Assessment>> {
        if subject_ids.is_empty() {
            return Ok(Vec::new());
        }

        let assessments = Assessments::find()
            .filter(Column::SubjectId.is_in(subject_ids.to_vec()))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ResultSysError::database_operation(format!("批量查询测评失败: {e}")))?;

        Ok(assessments
            .into_iter()
            .map(|m| m.into_assessment())
            .collect())
    }

    /// 获取最近有日期的测评（日期降序，未设日期的不计入）
    pub async fn list_recent_dated_assessments_impl(&self, limit: u64) -> Result<Vec<Assessment>> {
        let assessments = Assessments::find()
            .filter(Column::Date.is_not_null())
            .order_by_desc(Column::Date)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| ResultSysError::database_operation(format!("查询最近测评失败: {e}")))?;

        Ok(assessments
            .into_iter()
            .map(|m| m.into_assessment())
            .collect())
    }

    /// 更新测评
    pub async fn update_assessment_impl(
        &self,
        assessment_id: i64,
        update: UpdateAssessmentRequest,
    ) -> Result<Option<Assessment>> {
        let Some(existing) = Assessments::find_by_id(assessment_id)
            .one(&self.db)
            .await
            .map_err(|e| ResultSysError::database_operation(format!("查询测评失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(kind) = update.kind {
            model.kind = Set(kind);
        }
        if let Some(maximum_marks) = update.maximum_marks {
            model.maximum_marks = Set(maximum_marks);
        }
        if let Some(term) = update.term {
            model.term = Set(term);
        }
        if let Some(subject_id) = update.subject_id {
            model.subject_id = Set(subject_id);
        }
        if let Some(date) = update.date {
            model.date = Set(Some(date));
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| ResultSysError::database_operation(format!("更新测评失败: {e}")))?;

        Ok(Some(result.into_assessment()))
    }

    /// 删除测评
    pub async fn delete_assessment_impl(&self, assessment_id: i64) -> Result<bool> {
        let result = Assessments::delete_by_id(assessment_id)
            .exec(&self.db)
            .await
            .map_err(|e| ResultSysError::database_operation(format!("删除测评失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计测评总数
    pub async fn count_assessments_impl(&self) -> Result<u64> {
        Assessments::find()
            .count(&self.db)
            .await
            .map_err(|e| ResultSysError::database_operation(format!("统计测评总数失败: {e}")))
    }
}
