//! Unit tests for triage-schedule.

#[cfg(test)]
mod activation {
    use std::collections::HashSet;

    use triage_core::{AgentId, SimRng, Tick};

    use crate::RandomActivation;

    fn population(n: u32) -> RandomActivation {
        RandomActivation::from_agents((0..n).map(AgentId))
    }

    #[test]
    fn every_agent_once_per_tick() {
        let mut sched = population(30);
        let mut rng = SimRng::new(1);
        for _ in 0..10 {
            let order = sched.next_order(&mut rng);
            assert_eq!(order.len(), 30);
            let unique: HashSet<_> = order.iter().copied().collect();
            assert_eq!(unique.len(), 30);
        }
        assert_eq!(sched.steps(), Tick(10));
    }

    #[test]
    fn order_changes_between_ticks() {
        let mut sched = population(20);
        let mut rng = SimRng::new(99);
        let orders: HashSet<Vec<AgentId>> = (0..5).map(|_| sched.next_order(&mut rng)).collect();
        assert!(orders.len() > 1, "five 20-agent shuffles should not all coincide");
    }

    #[test]
    fn same_seed_same_orders() {
        let mut a = population(12);
        let mut b = population(12);
        let mut ra = SimRng::new(5);
        let mut rb = SimRng::new(5);
        for _ in 0..4 {
            assert_eq!(a.next_order(&mut ra), b.next_order(&mut rb));
        }
    }

    #[test]
    fn population_is_not_reordered() {
        let mut sched = population(8);
        let mut rng = SimRng::new(3);
        sched.next_order(&mut rng);
        assert_eq!(sched.agents(), (0..8).map(AgentId).collect::<Vec<_>>().as_slice());
    }

    #[test]
    fn empty_schedule() {
        let mut sched = RandomActivation::new();
        assert!(sched.is_empty());
        assert!(sched.next_order(&mut SimRng::new(0)).is_empty());
        sched.add(AgentId(4));
        assert_eq!(sched.len(), 1);
    }
}
