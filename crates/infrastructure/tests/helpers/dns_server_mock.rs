#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode};
use hickory_proto::rr::rdata::{A, SOA};
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream, UdpSocket};
use tokio::sync::oneshot;

/// What the mock resolver puts in its answer section.
#[derive(Debug, Clone)]
pub enum MockAnswer {
    Soa { serial: u32 },
    NoAnswers,
    NotSoa,
    /// UDP replies carry only the TC bit; TCP replies carry the SOA.
    Truncated { serial: u32 },
    WrongId,
    Silent,
}

#[derive(Default)]
struct Counters {
    udp_queries: AtomicUsize,
    tcp_queries: AtomicUsize,
    names: Mutex<Vec<String>>,
}

/// UDP + TCP DNS server on 127.0.0.1 answering SOA questions from a script.
pub struct MockDnsServer {
    addr: SocketAddr,
    answer: Arc<Mutex<MockAnswer>>,
    counters: Arc<Counters>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(answer: MockAnswer) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let listener = TcpListener::bind(addr).await?;

        let answer = Arc::new(Mutex::new(answer));
        let counters = Arc::new(Counters::default());
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let udp_answer = Arc::clone(&answer);
        let udp_counters = Arc::clone(&counters);
        let tcp_answer = Arc::clone(&answer);
        let tcp_counters = Arc::clone(&counters);

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            udp_counters.udp_queries.fetch_add(1, Ordering::SeqCst);
                            let script = udp_answer.lock().unwrap().clone();
                            if let Some(response) = build_response(&buf[..len], &script, false, &udp_counters) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                    accepted = listener.accept() => {
                        if let Ok((stream, _)) = accepted {
                            let answer = Arc::clone(&tcp_answer);
                            let counters = Arc::clone(&tcp_counters);
                            tokio::spawn(serve_tcp(stream, answer, counters));
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            answer,
            counters,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn set_answer(&self, answer: MockAnswer) {
        *self.answer.lock().unwrap() = answer;
    }

    pub fn udp_queries(&self) -> usize {
        self.counters.udp_queries.load(Ordering::SeqCst)
    }

    pub fn tcp_queries(&self) -> usize {
        self.counters.tcp_queries.load(Ordering::SeqCst)
    }

    pub fn queried_names(&self) -> Vec<String> {
        self.counters.names.lock().unwrap().clone()
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn serve_tcp(mut stream: TcpStream, answer: Arc<Mutex<MockAnswer>>, counters: Arc<Counters>) {
    let mut len_buf = [0u8; 2];
    if stream.read_exact(&mut len_buf).await.is_err() {
        return;
    }
    let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
    if stream.read_exact(&mut query).await.is_err() {
        return;
    }

    counters.tcp_queries.fetch_add(1, Ordering::SeqCst);
    let script = answer.lock().unwrap().clone();
    if let Some(response) = build_response(&query, &script, true, &counters) {
        let _ = stream.write_all(&(response.len() as u16).to_be_bytes()).await;
        let _ = stream.write_all(&response).await;
        let _ = stream.flush().await;
    }
}

pub fn soa_record(owner: &Name, serial: u32) -> Record {
    let mname = Name::from_ascii("ns1.example.com.").unwrap();
    let rname = Name::from_ascii("admin.example.com.").unwrap();
    let soa = SOA::new(mname, rname, serial, 7200, 3600, 1209600, 3600);
    Record::from_rdata(owner.clone(), 3600, RData::SOA(soa))
}

fn build_response(
    query: &[u8],
    script: &MockAnswer,
    over_tcp: bool,
    counters: &Counters,
) -> Option<Vec<u8>> {
    let request = Message::from_vec(query).ok()?;
    let owner = request.queries().first()?.name().clone();
    counters.names.lock().unwrap().push(owner.to_utf8());

    let id = match script {
        MockAnswer::WrongId => request.id().wrapping_add(1),
        MockAnswer::Silent => return None,
        _ => request.id(),
    };

    let mut response = Message::new(id, MessageType::Response, OpCode::Query);
    response.set_recursion_desired(true);
    response.set_recursion_available(true);
    for q in request.queries() {
        response.add_query(q.clone());
    }

    match script {
        MockAnswer::Soa { serial } => {
            response.add_answer(soa_record(&owner, *serial));
        }
        MockAnswer::WrongId => {
            response.add_answer(soa_record(&owner, 1));
        }
        MockAnswer::Truncated { serial } => {
            if over_tcp {
                response.add_answer(soa_record(&owner, *serial));
            } else {
                response.set_truncated(true);
            }
        }
        MockAnswer::NotSoa => {
            response.add_answer(Record::from_rdata(
                owner.clone(),
                300,
                RData::A(A(Ipv4Addr::new(93, 184, 216, 34))),
            ));
            response.add_answer(soa_record(&owner, 1));
        }
        MockAnswer::NoAnswers | MockAnswer::Silent => {}
    }

    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    response.emit(&mut encoder).ok()?;
    Some(buf)
}
