pub const GET_MENTOR: &str = r#"
query FindMentor($id: String!) {
  findMentor(id: $id) {
    id
    firstName
    lastName
    jobTitle
    photoUrl
    biography
    description
    email
    github
    country
    state
    yearsOfExperience
    skills
  }
}
"#;

pub const GET_AVAILABILITIES: &str = r#"
query FindMentorAvailability($mentorId: String!) {
  findMentorAvailability(mentorId: $mentorId) {
    availability {
      weekDay
      startDate
      startHour
    }
  }
}
"#;

pub const GET_VIEWER: &str = r#"
query Me {
  me {
    isMentor
  }
}
"#;
