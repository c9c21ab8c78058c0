#[derive(Debug, Clone)]
pub enum Message {
    // === SESSION MESSAGES ===
    SignupSuccess,
    SigninSuccess,
    LoggedOut,
    NotLoggedIn,

    // === VALIDATION MESSAGES ===
    NameTooShort(usize),
    EmailInvalid,
    PasswordTooShort(usize),
    PasswordMismatch,
    DescriptionEmpty,

    // === TASK MESSAGES ===
    TasksHeader(String), // date
    TaskCreated(String), // description
    TaskToggled(i64),
    TaskDeleted(i64),
    NoTasksForToday,
    NoPendingTasks,
    ShowingDoneTasks,
    HidingDoneTasks,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigNotFound,
    ConfigModuleServer,

    // === PROMPTS ===
    PromptName,
    PromptEmail,
    PromptPassword,
    PromptConfirmPassword,
    PromptServerApiUrl,
}
