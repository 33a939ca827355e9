use std::sync::Arc;

use crate::models::{
    assessments::{
        entities::Assessment,
        requests::{AssessmentListQuery, CreateAssessmentRequest, UpdateAssessmentRequest},
        responses::AssessmentListResponse,
    },
    classes::{
        entities::Class,
        requests::{ClassListQuery, CreateClassRequest, UpdateClassRequest},
        responses::ClassListResponse,
    },
    marks::{
        entities::Mark,
        requests::{CreateMarkRequest, MarkListQuery, UpdateMarkRequest},
        responses::MarkListResponse,
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, SubjectListQuery, UpdateSubjectRequest},
        responses::SubjectListResponse,
    },
    users::{entities::User, requests::CreateUserRequest},
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（password 字段须为已哈希值）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 统计用户总数
    async fn count_users(&self) -> Result<u64>;

    /// 班级管理方法
    // 创建班级
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class>;
    // 通过ID获取班级信息
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>>;
    // 列出班级
    async fn list_classes_with_pagination(
        &self,
        query: ClassListQuery,
    ) -> Result<ClassListResponse>;
    // 更新班级信息
    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>>;
    // 删除班级
    async fn delete_class(&self, class_id: i64) -> Result<bool>;
    // 统计班级总数
    async fn count_classes(&self) -> Result<u64>;

    /// 学生管理方法
    // 创建学生
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生信息
    async fn get_student_by_id(&self, student_id: i64) -> Result<Option<Student>>;
    // 列出学生
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    // 列出某班级全部学生（按ID升序）
    async fn list_students_by_class(&self, class_id: i64) -> Result<Vec<Student>>;
    // 更新学生信息
    async fn update_student(
        &self,
        student_id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    // 删除学生
    async fn delete_student(&self, student_id: i64) -> Result<bool>;
    // 统计学生总数
    async fn count_students(&self) -> Result<u64>;

    /// 科目管理方法
    // 创建科目
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject>;
    // 通过ID获取科目信息
    async fn get_subject_by_id(&self, subject_id: i64) -> Result<Option<Subject>>;
    // 列出科目
    async fn list_subjects_with_pagination(
        &self,
        query: SubjectListQuery,
    ) -> Result<SubjectListResponse>;
    // 列出某班级全部科目（按ID升序）
    async fn list_subjects_by_class(&self, class_id: i64) -> Result<Vec<Subject>>;
    // 按ID集合批量获取科目
    async fn list_subjects_by_ids(&self, ids: &[i64]) -> Result<Vec<Subject>>;
    // 更新科目信息
    async fn update_subject(
        &self,
        subject_id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>>;
    // 删除科目
    async fn delete_subject(&self, subject_id: i64) -> Result<bool>;
    // 统计科目总数
    async fn count_subjects(&self) -> Result<u64>;

    /// 测评管理方法
    // 创建测评
    async fn create_assessment(&self, assessment: CreateAssessmentRequest) -> Result<Assessment>;
    // 通过ID获取测评信息
    async fn get_assessment_by_id(&self, assessment_id: i64) -> Result<Option<Assessment>>;
    // 列出测评
    async fn list_assessments_with_pagination(
        &self,
        query: AssessmentListQuery,
    ) -> Result<AssessmentListResponse>;
    // 按ID集合批量获取测评
    async fn list_assessments_by_ids(&self, ids: &[i64]) -> Result<Vec<Assessment>>;
    // 按科目ID集合批量获取测评
    async fn list_assessments_by_subject_ids(&self, subject_ids: &[i64])
    -> Result<Vec<Assessment>>;
    // 获取最近有日期的测评（日期降序）
    async fn list_recent_dated_assessments(&self, limit: u64) -> Result<Vec<Assessment>>;
    // 更新测评信息
    async fn update_assessment(
        &self,
        assessment_id: i64,
        update: UpdateAssessmentRequest,
    ) -> Result<Option<Assessment>>;
    // 删除测评
    async fn delete_assessment(&self, assessment_id: i64) -> Result<bool>;
    // 统计测评总数
    async fn count_assessments(&self) -> Result<u64>;

    /// 成绩管理方法
    // 录入成绩
    async fn create_mark(&self, mark: CreateMarkRequest) -> Result<Mark>;
    // 通过ID获取成绩
    async fn get_mark_by_id(&self, mark_id: i64) -> Result<Option<Mark>>;
    // 列出成绩
    async fn list_marks_with_pagination(&self, query: MarkListQuery) -> Result<MarkListResponse>;
    // 列出某学生全部成绩（按录入顺序，即ID升序）
    async fn list_marks_by_student(&self, student_id: i64) -> Result<Vec<Mark>>;
    // 按学生ID集合批量获取成绩（按ID升序）
    async fn list_marks_by_student_ids(&self, student_ids: &[i64]) -> Result<Vec<Mark>>;
    // 按测评ID集合批量获取成绩（按ID升序）
    async fn list_marks_by_assessment_ids(&self, assessment_ids: &[i64]) -> Result<Vec<Mark>>;
    // 列出全部成绩（按ID升序）
    async fn list_all_marks(&self) -> Result<Vec<Mark>>;
    // 更新成绩
    async fn update_mark(&self, mark_id: i64, update: UpdateMarkRequest) -> Result<Option<Mark>>;
    // 删除成绩
    async fn delete_mark(&self, mark_id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
