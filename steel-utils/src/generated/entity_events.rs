#[doc = r" Status type for the entity event broadcast."]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum EntityStatus {
    TippedArrowParticles = 0,
    RabbitJump = 1,
    Hurt = 2,
    Death = 3,
    Attack = 4,
    TamingFailed = 6,
    TamingSucceeded = 7,
    WolfShake = 8,
    UseItemComplete = 9,
    ThornsHurt = 33,
    TotemOfUndying = 35,
    DrownHurt = 36,
    BurnHurt = 37,
    Poof = 60,
}
