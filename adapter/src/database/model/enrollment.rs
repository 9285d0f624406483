use kernel::model::{
    enrollment::Enrollment,
    id::{EnrollmentId, UserId},
};

#[derive(sqlx::FromRow)]
pub struct EnrollmentRow {
    pub id: i32,
    pub user_id: i32,
}

impl From<EnrollmentRow> for Enrollment {
    fn from(value: EnrollmentRow) -> Self {
        Enrollment {
            enrollment_id: EnrollmentId::new(value.id),
            user_id: UserId::new(value.user_id),
        }
    }
}
