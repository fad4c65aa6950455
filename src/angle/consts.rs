pub(crate) const FULL_TURN_DEG: u16 = 360;

pub(crate) const DEGREE_SIGN: char = '°';
