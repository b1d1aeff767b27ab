// Game modules: the controllable player

pub mod player;
