use soroban_sdk::{contractevent, Address};

#[contractevent]
#[derive(Clone, Debug)]
pub struct InstanceRegisteredEvent {
    #[topic]
    pub instance: Address,
    pub index: u32,
    pub version: u32,
}
