use crate::core::Board;

pub struct GameRenderState<'a> {
    pub board: &'a Board,
    pub won: bool,
    pub message: Option<String>,
}
