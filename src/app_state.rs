use crate::skill::SkillHandler;

pub struct AppState {
    pub handler: SkillHandler,
}
