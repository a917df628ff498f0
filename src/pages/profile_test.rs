use super::*;

#[test]
fn role_label_covers_every_role() {
    assert_eq!(role_label(Role::User), "Member");
    assert_eq!(role_label(Role::Student), "Student");
    assert_eq!(role_label(Role::Teacher), "Teacher");
    assert_eq!(role_label(Role::Admin), "Administrator");
}
