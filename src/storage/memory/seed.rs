//! 启动时写入的示例数据

use crate::models::batches::entities::Batch;
use crate::models::classrooms::entities::{ClassMode, Classroom, Division};
use crate::models::common::{ActiveStatus, EnrollmentStatus};
use crate::models::departments::entities::Department;
use crate::models::due_fees::entities::DueFee;
use crate::models::fee_settings::entities::FeeSetting;
use crate::models::staff::entities::StaffMember;
use crate::models::students::entities::{Gender, Student};
use crate::models::subjects::entities::Subject;
use crate::models::teachers::entities::Teacher;
use crate::models::transactions::entities::{PaymentType, Transaction};

fn months(list: &[&str]) -> Vec<String> {
    list.iter().map(|m| m.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn student(
    id: &str,
    first_name: &str,
    last_name: &str,
    gender: Gender,
    dob: &str,
    phone: &str,
    guardian_name: &str,
    address: &str,
    department: &str,
    qualification: &str,
    class: &str,
    sibling_id: &str,
    fees_due: &[&str],
) -> Student {
    Student {
        id: id.to_string(),
        admission_no: format!("STU2023{:03}", id.parse::<u32>().unwrap_or_default()),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        gender,
        dob: dob.to_string(),
        phone: phone.to_string(),
        guardian_name: guardian_name.to_string(),
        address: address.to_string(),
        admission_date: "2023-09-01".to_string(),
        status: EnrollmentStatus::Active,
        academic_year_id: "1".to_string(),
        department: department.to_string(),
        qualification: qualification.to_string(),
        joining_date: "2023-09-01".to_string(),
        class: Some(class.to_string()),
        sibling_id: Some(sibling_id.to_string()),
        fees_due: months(fees_due),
    }
}

pub fn students() -> Vec<Student> {
    use Gender::{Female, Male};
    vec![
        student("1", "Mohammed", "Ahmed", Male, "2015-03-15", "501234567", "Ahmed Mohammed", "123 Al Maktoum St, Dubai", "Quran", "Hafiz", "4A", "STU2023010", &["jan", "feb", "mar", "apr"]),
        student("2", "Fatima", "Ali", Female, "2016-05-22", "551234567", "Ali Hassan", "456 Sheikh Zayed Rd, Dubai", "Islamic Studies", "Student", "3B", "STU2023011", &["feb", "mar", "apr"]),
        student("3", "Omar", "Khalid", Male, "2015-11-10", "521234567", "Khalid Omar", "789 Al Wasl Rd, Dubai", "Quran", "Student", "5A", "STU2023012", &["mar", "apr"]),
        student("4", "Aisha", "Yusuf", Female, "2016-07-18", "581234567", "Yusuf Ahmed", "321 Jumeirah St, Dubai", "Islamic Studies", "Student", "4C", "STU2023013", &["apr"]),
        student("5", "Hassan", "Saleh", Male, "2015-02-08", "561234567", "Saleh Hassan", "22 Al Nahda St, Dubai", "Quran", "Student", "4B", "STU2023014", &["jan", "feb"]),
        student("6", "Maryam", "Saeed", Female, "2016-01-30", "571234567", "Saeed Abdullah", "88 Al Barsha, Dubai", "Islamic Studies", "Student", "3A", "STU2023015", &["feb", "mar"]),
        student("7", "Abdullah", "Nasser", Male, "2014-12-14", "541234567", "Nasser Abdullah", "14 Al Qusais, Dubai", "Quran", "Student", "6A", "STU2023016", &["jan", "feb", "mar"]),
        student("8", "Zainab", "Hameed", Female, "2016-09-05", "531234567", "Hameed Ali", "55 Deira, Dubai", "Islamic Studies", "Student", "3C", "STU2023017", &["mar"]),
        student("9", "Yusuf", "Rahman", Male, "2015-06-21", "591234567", "Rahman Yusuf", "90 Al Warqa, Dubai", "Quran", "Student", "5B", "STU2023018", &["apr"]),
        student("10", "Khadija", "Mustafa", Female, "2016-03-11", "501987654", "Mustafa Ibrahim", "12 Muhaisnah, Dubai", "Islamic Studies", "Student", "4A", "STU2023001", &["jan", "feb"]),
        student("11", "Bilal", "Farooq", Male, "2015-08-19", "551987654", "Farooq Ahmed", "67 Karama, Dubai", "Quran", "Student", "4C", "STU2023002", &["feb", "mar"]),
        student("12", "Safiya", "Latif", Female, "2016-10-02", "521987654", "Latif Khan", "101 Bur Dubai", "Islamic Studies", "Student", "3B", "STU2023003", &["mar", "apr"]),
        student("13", "Ibrahim", "Zayed", Male, "2014-04-27", "581987654", "Zayed Ibrahim", "44 Mirdif, Dubai", "Quran", "Student", "6B", "STU2023004", &["jan"]),
        student("14", "Noor", "Anwar", Female, "2016-12-09", "591987654", "Anwar Mahmood", "73 Discovery Gardens, Dubai", "Islamic Studies", "Student", "2A", "STU2023005", &[]),
    ]
}

fn teacher(
    id: &str,
    name: &str,
    department: &str,
    qualification: &str,
    joining_date: &str,
    status: EnrollmentStatus,
) -> Teacher {
    Teacher {
        id: id.to_string(),
        user_id: format!("user_{id}"),
        name: name.to_string(),
        department: department.to_string(),
        designation: None,
        qualification: Some(qualification.to_string()),
        joining_date: joining_date.to_string(),
        status,
    }
}

pub fn teachers() -> Vec<Teacher> {
    use EnrollmentStatus::{Active, Inactive};
    vec![
        teacher("1", "Ahmed Khan", "Quran", "Hafiz-ul-Quran, Ijazah in Qira'at", "2020-01-15", Active),
        teacher("2", "Fatima Ali", "Fiqh", "Alimiyyah Degree, Specialization in Fiqh", "2019-05-22", Active),
        teacher("3", "Yusuf Abdullah", "Hadeeth", "Masters in Hadith Sciences", "2021-03-10", Active),
        teacher("4", "Aisha Mohammed", "Arabic", "PhD in Arabic Language and Literature", "2018-11-05", Active),
        teacher("5", "Omar Farooq", "Islamic History", "MA in Islamic History and Civilization", "2022-02-18", Active),
        teacher("6", "Maryam Ibrahim", "Quran", "Hafiza, Qaria with Ijazah in Hafs 'an 'Asim", "2021-07-10", Active),
        teacher("7", "Khalid Hassan", "Fiqh", "Alim Course, Specialization in Hanafi Fiqh", "2020-09-15", Active),
        teacher("8", "Zainab Ahmed", "Tajweed", "Ijazah in Tajweed and Qira'at", "2021-01-10", Active),
        teacher("9", "Ibrahim Malik", "Islamic Finance", "PhD in Islamic Economics and Finance", "2020-06-22", Active),
        teacher("10", "Amina Yusuf", "Quran Memorization", "Hafiza with Ijazah in Hafs and Shu'bah", "2022-03-15", Active),
        teacher("11", "Mohammed Ali", "Seerah", "MA in Islamic Studies, Specialization in Seerah", "2019-08-05", Inactive),
        teacher("12", "Sarah Johnson", "Islamic Psychology", "PhD in Psychology, Islamic Counseling Certification", "2021-09-12", Active),
    ]
}

fn staff_member(
    id: &str,
    user_no: u32,
    name: &str,
    department: &str,
    designation: &str,
    joining_date: &str,
    status: EnrollmentStatus,
) -> StaffMember {
    StaffMember {
        id: id.to_string(),
        user_id: format!("user_{user_no}"),
        name: name.to_string(),
        department: department.to_string(),
        designation: Some(designation.to_string()),
        qualification: None,
        joining_date: joining_date.to_string(),
        status,
    }
}

pub fn staff() -> Vec<StaffMember> {
    use EnrollmentStatus::{Active, Inactive};
    vec![
        staff_member("1", 101, "Abdul Rahman", "Administration", "Principal", "2018-06-15", Active),
        staff_member("2", 102, "Aisha Mohammed", "Administration", "Vice Principal", "2019-03-22", Active),
        staff_member("3", 103, "Omar Farooq", "Accounts", "Accountant", "2020-01-10", Active),
        staff_member("4", 104, "Fatima Ali", "Reception", "Receptionist", "2021-05-18", Active),
        staff_member("5", 105, "Yusuf Khan", "Maintenance", "Facility Manager", "2019-11-05", Active),
        staff_member("6", 106, "Zainab Ahmed", "IT", "IT Support", "2021-02-28", Active),
        staff_member("7", 107, "Khalid Hassan", "Security", "Security Head", "2020-07-12", Inactive),
        staff_member("8", 108, "Maryam Ibrahim", "Library", "Librarian", "2021-08-15", Active),
        staff_member("9", 109, "Ibrahim Malik", "Transport", "Transport Incharge", "2020-09-22", Active),
        staff_member("10", 110, "Amina Yusuf", "HR", "HR Manager", "2019-04-10", Active),
    ]
}

fn classroom(
    id: &str,
    grade_id: u32,
    division_id: Division,
    class_mode_id: ClassMode,
    teacher_id: &str,
    status: ActiveStatus,
) -> Classroom {
    Classroom {
        id: id.to_string(),
        grade_id,
        division_id,
        class_mode_id,
        academic_year_id: "2023-24".to_string(),
        teacher_id: teacher_id.to_string(),
        status,
        created_at: "2023-06-01T08:00:00Z".to_string(),
        updated_at: "2023-06-01T08:00:00Z".to_string(),
    }
}

pub fn classrooms() -> Vec<Classroom> {
    vec![
        classroom("1", 1, Division::A, ClassMode::Morning, "tchr-001", ActiveStatus::Active),
        classroom("2", 1, Division::B, ClassMode::Morning, "tchr-002", ActiveStatus::Active),
        classroom("3", 2, Division::A, ClassMode::Morning, "tchr-003", ActiveStatus::Active),
        classroom("4", 5, Division::A, ClassMode::Evening, "tchr-004", ActiveStatus::Active),
        classroom("5", 5, Division::B, ClassMode::Evening, "tchr-005", ActiveStatus::Inactive),
    ]
}

pub fn subjects() -> Vec<Subject> {
    [
        ("sub-001", "Quran Recitation", "dept-001"),
        ("sub-002", "Tajweed", "dept-001"),
        ("sub-003", "Fiqh", "dept-002"),
        ("sub-004", "Hadith", "dept-002"),
        ("sub-005", "Arabic Language", "dept-003"),
    ]
    .into_iter()
    .map(|(id, name, department)| Subject {
        id: id.to_string(),
        subject_name: name.to_string(),
        department_id: department.to_string(),
        status: EnrollmentStatus::Active,
    })
    .collect()
}

pub fn batches() -> Vec<Batch> {
    ["Morning Batch", "Evening Batch", "Weekend Batch", "Special Batches"]
        .into_iter()
        .enumerate()
        .map(|(i, name)| Batch {
            id: (i + 1).to_string(),
            batch_name: name.to_string(),
        })
        .collect()
}

pub fn departments() -> Vec<Department> {
    ["Quran", "Hadith", "Fiqh"]
        .into_iter()
        .enumerate()
        .map(|(i, name)| Department {
            id: (i + 1).to_string(),
            name: name.to_string(),
        })
        .collect()
}

pub fn fee_settings() -> Vec<FeeSetting> {
    (1..=5)
        .map(|i| FeeSetting {
            id: i.to_string(),
            classroom_id: format!("class_{i}"),
            amount: 80.0 + 20.0 * f64::from(i),
            academic_year_id: "2023-2024".to_string(),
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn due_fee(
    id: &str,
    student_id: &str,
    student_name: &str,
    class_name: &str,
    sibling_id: Option<&str>,
    fee_amount: f64,
    due_months: u32,
    last_paid_date: &str,
) -> DueFee {
    DueFee {
        id: id.to_string(),
        student_id: student_id.to_string(),
        student_name: student_name.to_string(),
        class_name: class_name.to_string(),
        sibling_id: sibling_id.map(str::to_string),
        fee_amount,
        due_months,
        last_paid_date: Some(last_paid_date.to_string()),
        total_due: fee_amount * f64::from(due_months),
    }
}

pub fn due_fees() -> Vec<DueFee> {
    vec![
        due_fee("df1", "1", "Mohammed Ali", "Class 1A", Some("2"), 100.0, 3, "2023-11-30"),
        due_fee("df2", "3", "Ahmed Khan", "Class 2B", None, 120.0, 2, "2023-10-31"),
        due_fee("df3", "5", "Fatima Ahmed", "Class 3A", Some("7"), 110.0, 4, "2023-09-30"),
        due_fee("df4", "8", "Yusuf Abdullah", "Class 4B", None, 130.0, 1, "2023-12-15"),
        due_fee("df5", "10", "Aisha Mohammed", "Class 5A", Some("12"), 140.0, 5, "2023-08-31"),
    ]
}

pub fn transactions() -> Vec<Transaction> {
    [
        ("1", "2025-12-19", "Ahmed Khan", "STU001", 150.0, PaymentType::Cash),
        ("2", "2025-12-18", "Fatima Ali", "STU042", 200.0, PaymentType::Card),
        ("3", "2025-12-17", "Omar Hassan", "STU123", 175.5, PaymentType::Cash),
        ("4", "2025-12-16", "Aisha Mohammed", "STU087", 225.75, PaymentType::Card),
        ("5", "2025-12-15", "Yusuf Abdullah", "STU156", 190.25, PaymentType::Cash),
    ]
    .into_iter()
    .map(|(id, date, name, student_id, amount, payment_type)| Transaction {
        id: id.to_string(),
        date: date.to_string(),
        name: name.to_string(),
        student_id: student_id.to_string(),
        amount,
        payment_type,
    })
    .collect()
}
